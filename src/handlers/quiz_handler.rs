use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::QuizRequest, response::QuizResponse},
};

/// Unknown themes answer `200` with `success: false`; clients check the flag.
#[post("/get_quiz")]
pub async fn get_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let theme = request.theme.trim();
    log::info!("[{}] Requested quiz theme: {:?}", get_request_id(&req), theme);

    match state.quiz_service.lookup_quiz(theme).await {
        Ok(quiz) => Ok(HttpResponse::Ok().json(QuizResponse::found(quiz))),
        Err(AppError::NotFound(message)) => {
            Ok(HttpResponse::Ok().json(QuizResponse::missing(message)))
        }
        Err(e) => Err(e),
    }
}
