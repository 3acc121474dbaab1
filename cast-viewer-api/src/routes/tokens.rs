use actix_web::web;
use cast_mints::AlchemyClient;

use crate::handlers::tokens_handler;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/collection/owner/{address}/tokens",
        web::get().to(tokens_handler::get_owner_tokens::<AlchemyClient>),
    );
}
