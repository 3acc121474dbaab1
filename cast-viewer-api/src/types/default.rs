use serde::Serialize;

#[derive(utoipa::ToSchema, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
}
