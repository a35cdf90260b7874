use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let status = state.model_client.check_health().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        gemini_api: if status.ok { "connected" } else { "error" },
        gemini_message: status.message,
        timestamp: Utc::now(),
    })
}
