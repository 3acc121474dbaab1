use actix_web::{get, HttpResponse, Responder};

use crate::types::default::HealthCheckResponse;

#[utoipa::path(
    tag = "HealthCheck",
    responses(
        (status = 200, description = "Health Check", body = HealthCheckResponse)
    )
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
