use actix_web::{web, HttpResponse, Responder};
use cast_mints::{FetchPhase, NftGateway, OwnedTokenFetcher};
use serde_json::json;

use crate::models::card::NftCard;
use crate::types::tokens::OwnedTokensResponse;

/// Tokens of the collection held by the wallet in the path. Runs the
/// fan-out on demand; per-token metadata failures come back as cards with
/// placeholder fields rather than errors.
pub async fn get_owner_tokens<P>(
    path: web::Path<String>,
    fetcher: web::Data<OwnedTokenFetcher<P>>,
) -> impl Responder
where
    P: NftGateway + 'static,
{
    let owner = path.into_inner();
    let snapshot = fetcher.refetch_for(&owner).await;

    if snapshot.phase == FetchPhase::Failure {
        tracing::error!(owner = %owner, error = ?snapshot.error, "owned token lookup failed");
        return HttpResponse::InternalServerError().json(json!({
            "error": snapshot.error,
        }));
    }

    let cards: Vec<NftCard> = snapshot.data.iter().map(NftCard::from_owned).collect();
    HttpResponse::Ok().json(OwnedTokensResponse {
        data: cards,
        loading: false,
        error: None,
    })
}
