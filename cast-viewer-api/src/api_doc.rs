use actix_web::{HttpResponse, Responder};
use utoipa::openapi::path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType};
use utoipa::openapi::{ContentBuilder, Ref, Required, ResponseBuilder};
use utoipa::OpenApi;

use crate::handlers::default_handler;
use crate::models::card::{AuthorInfo, AuthorKind, NftCard};
use crate::types::default::HealthCheckResponse;
use crate::types::mints::RecentMintsResponse;
use crate::types::tokens::OwnedTokensResponse;

#[derive(OpenApi)]
#[openapi(
    paths(default_handler::health_check),
    components(schemas(
        HealthCheckResponse,
        RecentMintsResponse,
        OwnedTokensResponse,
        NftCard,
        AuthorInfo,
        AuthorKind
    ))
)]
pub struct ApiDoc;

fn json_response(description: &str, schema_name: &str) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Ref::from_schema_name(schema_name))
                .build(),
        )
        .build()
}

// The collection handlers are generic over the provider seam, which rules
// out `#[utoipa::path]`; their path items are built by hand instead.
fn collection_path_items() -> Vec<(&'static str, PathItem)> {
    let recent_mints = PathItem::new(
        PathItemType::Get,
        OperationBuilder::new()
            .operation_id(Some("get_recent_mints"))
            .response(
                "200",
                json_response("Current recent-mints snapshot", "RecentMintsResponse"),
            )
            .build(),
    );

    let refetch = PathItem::new(
        PathItemType::Post,
        OperationBuilder::new()
            .operation_id(Some("refetch_recent_mints"))
            .response(
                "202",
                ResponseBuilder::new()
                    .description("Background discovery cycle started")
                    .build(),
            )
            .build(),
    );

    let owner_tokens = PathItem::new(
        PathItemType::Get,
        OperationBuilder::new()
            .operation_id(Some("get_owner_tokens"))
            .parameter(
                ParameterBuilder::new()
                    .name("address")
                    .parameter_in(ParameterIn::Path)
                    .required(Required::True)
                    .build(),
            )
            .response(
                "200",
                json_response("Tokens held by the wallet", "OwnedTokensResponse"),
            )
            .response(
                "500",
                ResponseBuilder::new()
                    .description("Owner lookup failed")
                    .build(),
            )
            .build(),
    );

    vec![
        ("/collection/recent-mints", recent_mints),
        ("/collection/recent-mints/refetch", refetch),
        ("/collection/owner/{address}/tokens", owner_tokens),
    ]
}

/// Full OpenAPI document: derived health path plus the hand-built
/// collection paths.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    for (path, item) in collection_path_items() {
        openapi.paths.paths.insert(path.to_string(), item);
    }
    openapi
}

pub async fn serve() -> impl Responder {
    HttpResponse::Ok().json(document())
}
