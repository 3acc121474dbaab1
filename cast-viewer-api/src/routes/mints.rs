use actix_web::web;
use cast_mints::AlchemyClient;

use crate::handlers::mints_handler;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/collection/recent-mints",
        web::get().to(mints_handler::get_recent_mints::<AlchemyClient>),
    )
    .route(
        "/collection/recent-mints/refetch",
        web::post().to(mints_handler::refetch_recent_mints::<AlchemyClient>),
    );
}
