use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::MessageResponse};

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Welcome to TechTales Story Generator API".to_string(),
    })
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let themes = state.quiz_service.available_themes().await.unwrap_or_default();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "quiz_themes": themes.len()
    }))
}
