use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Off-chain token metadata as returned by the provider. Real collections
/// are loose with this document, so every field is optional and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<MetadataAttribute>>,
}

/// One `{trait_type, value}` pair. Values show up as strings or numbers in
/// the wild, so they stay a raw JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

impl TokenMetadata {
    /// Image reference for display, preferring `image` over `image_url`.
    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_deref().or(self.image_url.as_deref())
    }

    /// The attribute whose trait type matches `trait_type`
    /// (case-insensitive).
    pub fn attribute(&self, trait_type: &str) -> Option<&MetadataAttribute> {
        self.attributes.as_ref()?.iter().find(|attr| {
            attr.trait_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(trait_type))
        })
    }
}
