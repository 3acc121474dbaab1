use crate::api_doc;

#[test]
fn openapi_documents_every_registered_route() {
    let doc = api_doc::document();
    for path in [
        "/health",
        "/collection/recent-mints",
        "/collection/recent-mints/refetch",
        "/collection/owner/{address}/tokens",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}

#[test]
fn openapi_references_response_schemas() {
    let doc = api_doc::document();
    let schemas = doc.components.expect("components").schemas;
    for name in ["RecentMintsResponse", "OwnedTokensResponse", "NftCard"] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}
