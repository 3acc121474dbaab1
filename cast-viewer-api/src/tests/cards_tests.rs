use cast_mints::metadata::MetadataAttribute;
use cast_mints::{EnrichedMintRecord, MintEvent, TokenMetadata};
use serde_json::json;

use crate::models::card::{derive_author, strip_cast_prefix, AuthorKind, NftCard, PLACEHOLDER_IMAGE};

fn mint_record(metadata: Option<TokenMetadata>) -> EnrichedMintRecord {
    EnrichedMintRecord {
        event: MintEvent {
            token_id: "42".to_string(),
            to_address: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            originator_id: "12152".to_string(),
            content_hash: format!("0x{}", "ab".repeat(32)),
            block_number: 900,
            transaction_hash: "0xdeadbeef".to_string(),
            timestamp: None,
        },
        metadata,
        contract_address: cast_mints::constants::CONTRACT_ADDRESS.to_string(),
        chain: cast_mints::constants::CHAIN.to_string(),
    }
}

fn metadata_with_author(value: serde_json::Value) -> TokenMetadata {
    TokenMetadata {
        name: Some("cast by @alice, gm everyone".to_string()),
        attributes: Some(vec![MetadataAttribute {
            trait_type: Some("Author".to_string()),
            value,
            display_type: None,
        }]),
        ..Default::default()
    }
}

#[test]
fn strips_cast_by_prefix_case_insensitive() {
    assert_eq!(strip_cast_prefix("cast by @alice, gm"), "gm");
    assert_eq!(strip_cast_prefix("Cast by @bob hello"), "hello");
    assert_eq!(strip_cast_prefix("plain name"), "plain name");
}

#[test]
fn numeric_author_becomes_fid() {
    let author = derive_author(&metadata_with_author(json!(12152))).expect("author");
    assert_eq!(author.kind, AuthorKind::Fid);
    assert_eq!(author.display, "FID 12152");
    assert_eq!(author.profile_url, "https://farcaster.xyz/12152");

    let author = derive_author(&metadata_with_author(json!("317"))).expect("author");
    assert_eq!(author.kind, AuthorKind::Fid);
}

#[test]
fn non_numeric_author_becomes_username() {
    let author = derive_author(&metadata_with_author(json!("alice.eth"))).expect("author");
    assert_eq!(author.kind, AuthorKind::Username);
    assert_eq!(author.display, "@alice.eth");
    assert_eq!(author.profile_url, "https://farcaster.xyz/alice.eth");

    // Zero and negatives are not valid FIDs.
    let author = derive_author(&metadata_with_author(json!("0"))).expect("author");
    assert_eq!(author.kind, AuthorKind::Username);
}

#[test]
fn numeric_prefixed_author_is_a_username_not_a_fid() {
    // Whole-value parse: "123abc" is not a FID here, it is a handle.
    let author = derive_author(&metadata_with_author(json!("123abc"))).expect("author");
    assert_eq!(author.kind, AuthorKind::Username);
    assert_eq!(author.display, "@123abc");
    assert_eq!(author.profile_url, "https://farcaster.xyz/123abc");
}

#[test]
fn author_is_absent_without_attributes() {
    assert!(derive_author(&TokenMetadata::default()).is_none());
}

#[test]
fn null_metadata_card_is_displayable() {
    let card = NftCard::from_mint(&mint_record(None));
    assert_eq!(card.name, "NFT #42");
    assert_eq!(card.image, PLACEHOLDER_IMAGE);
    assert!(!card.has_metadata);
    assert!(card.author.is_none());
    assert_eq!(card.block_number, Some(900));
    assert_eq!(card.minter_fid.as_deref(), Some("12152"));
}

#[test]
fn metadata_card_cleans_name_and_keeps_links() {
    let mut metadata = metadata_with_author(json!("alice"));
    metadata.image = Some("ipfs://image".to_string());
    metadata.external_url = Some("https://example.com/42".to_string());

    let card = NftCard::from_mint(&mint_record(Some(metadata)));
    assert_eq!(card.name, "gm everyone");
    assert_eq!(card.image, "ipfs://image");
    assert_eq!(card.external_url.as_deref(), Some("https://example.com/42"));
    assert!(card.has_metadata);
}
