use serde::Serialize;

use crate::models::card::NftCard;

#[derive(utoipa::ToSchema, Serialize)]
pub struct OwnedTokensResponse {
    pub data: Vec<NftCard>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
