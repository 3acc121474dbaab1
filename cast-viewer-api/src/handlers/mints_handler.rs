use actix_web::{web, HttpResponse, Responder};
use cast_mints::{ChainReader, MintScanner, NftGateway};
use serde_json::json;

use crate::models::card::NftCard;
use crate::types::mints::RecentMintsResponse;

/// Current recent-mints snapshot. While a scan is running the previous list
/// is still served with `loading: true`; after a failed scan the previous
/// list is served together with the error string.
pub async fn get_recent_mints<P>(scanner: web::Data<MintScanner<P>>) -> impl Responder
where
    P: ChainReader + NftGateway + 'static,
{
    let snapshot = scanner.snapshot().await;
    let cards: Vec<NftCard> = snapshot.data.iter().map(NftCard::from_mint).collect();
    HttpResponse::Ok().json(RecentMintsResponse {
        data: cards,
        loading: snapshot.is_loading(),
        error: snapshot.error,
    })
}

/// Kicks off a fresh discovery cycle in the background; the client polls
/// `GET /collection/recent-mints` for the outcome.
pub async fn refetch_recent_mints<P>(scanner: web::Data<MintScanner<P>>) -> impl Responder
where
    P: ChainReader + NftGateway + 'static,
{
    let scanner = scanner.clone();
    tokio::spawn(async move { scanner.refetch().await });
    HttpResponse::Accepted().json(json!({ "status": "refetch started" }))
}
