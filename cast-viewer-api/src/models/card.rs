use std::sync::OnceLock;

use cast_mints::{EnrichedMintRecord, OwnedToken, TokenMetadata};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Inline SVG shown when a token has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMzAwIiBoZWlnaHQ9IjMwMCIgZmlsbD0iI2YxZjFmMSIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LWZhbWlseT0iQXJpYWwsIHNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMjQiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGRvbWluYW50LWJhc2VsaW5lPSJtaWRkbGUiIGZpbGw9IiM5OTkiPk5GVCBJbWFnZTwvdGV4dD48L3N2Zz4=";

const PROFILE_BASE_URL: &str = "https://farcaster.xyz";

/// Everything the front end needs to render one token card. Derived fields
/// already carry their fallbacks, so a card built from null metadata is
/// fully displayable.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct NftCard {
    pub token_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInfo>,
    pub has_metadata: bool,
    pub contract_address: String,
    pub chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minted_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minter_fid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_hash: Option<String>,
}

/// Who authored the cast a token was minted from. A numeric positive
/// `author` attribute is a Farcaster FID; anything else is a display handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct AuthorInfo {
    pub kind: AuthorKind,
    pub display: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthorKind {
    Fid,
    Username,
}

fn cast_prefix() -> &'static Regex {
    static CAST_PREFIX: OnceLock<Regex> = OnceLock::new();
    CAST_PREFIX.get_or_init(|| {
        Regex::new(r"(?i)^cast by @[^,\s]+,?\s*").expect("valid cast prefix regex")
    })
}

/// Strips the `cast by @user, ` prefix some token names and ids carry.
pub fn strip_cast_prefix(value: &str) -> String {
    cast_prefix().replace(value, "").trim().to_string()
}

/// Derives the author from the metadata's `author` attribute.
pub fn derive_author(metadata: &TokenMetadata) -> Option<AuthorInfo> {
    let attribute = metadata.attribute("author")?;
    let value = match &attribute.value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    match value.parse::<i64>() {
        Ok(fid) if fid > 0 => Some(AuthorInfo {
            kind: AuthorKind::Fid,
            display: format!("FID {fid}"),
            profile_url: format!("{PROFILE_BASE_URL}/{fid}"),
        }),
        _ => Some(AuthorInfo {
            kind: AuthorKind::Username,
            display: format!("@{value}"),
            profile_url: format!("{PROFILE_BASE_URL}/{value}"),
        }),
    }
}

fn base_card(token_id: &str, metadata: Option<&TokenMetadata>, contract: &str, chain: &str) -> NftCard {
    let display_token_id = strip_cast_prefix(token_id);
    let name = metadata
        .and_then(|m| m.name.as_deref())
        .map(strip_cast_prefix)
        .unwrap_or_else(|| format!("NFT #{display_token_id}"));

    NftCard {
        token_id: display_token_id,
        name,
        description: metadata.and_then(|m| m.description.clone()),
        image: metadata
            .and_then(|m| m.image_ref())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        external_url: metadata.and_then(|m| m.external_url.clone()),
        author: metadata.and_then(derive_author),
        has_metadata: metadata.is_some(),
        contract_address: contract.to_string(),
        chain: chain.to_string(),
        block_number: None,
        transaction_hash: None,
        minted_to: None,
        minter_fid: None,
        cast_hash: None,
    }
}

impl NftCard {
    pub fn from_mint(record: &EnrichedMintRecord) -> Self {
        let mut card = base_card(
            &record.event.token_id,
            record.metadata.as_ref(),
            &record.contract_address,
            &record.chain,
        );
        card.block_number = Some(record.event.block_number);
        card.transaction_hash = Some(record.event.transaction_hash.clone());
        card.minted_to = Some(record.event.to_address.clone());
        card.minter_fid = Some(record.event.originator_id.clone());
        if !record.event.content_hash.is_empty() {
            card.cast_hash = Some(record.event.content_hash.clone());
        }
        card
    }

    pub fn from_owned(token: &OwnedToken) -> Self {
        base_card(
            &token.token_id,
            token.metadata.as_ref(),
            &token.contract_address,
            &token.chain,
        )
    }
}
