use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::StoryRequest, response::StoryResponse},
};

#[post("/generate_story")]
pub async fn generate_story(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<StoryRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    log::info!("[{}] Generating story for {:?}", request_id, request.query);

    let story = state
        .story_service
        .story_for_topic(&request.query)
        .await
        .inspect_err(|e| log::error!("[{}] Story generation failed: {}", request_id, e))?;

    let images = state
        .image_service
        .synthesize_story_images(&story)
        .await
        .inspect_err(|e| log::error!("[{}] Story illustration failed: {}", request_id, e))?;

    log::info!(
        "[{}] Story ready: {} chars, {} images",
        request_id,
        story.len(),
        images.len()
    );

    Ok(HttpResponse::Ok().json(StoryResponse {
        success: true,
        story,
        images,
    }))
}
