use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::ImageRequest, response::ImageResponse},
};

#[post("/generate_image")]
pub async fn generate_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request_id = get_request_id(&req);
    log::info!("[{}] Generating image for {:?}", request_id, request.prompt);

    let image_url = state
        .image_service
        .synthesize_single_image(&request.prompt)
        .await
        .inspect_err(|e| log::error!("[{}] Image generation failed: {}", request_id, e))?;

    Ok(HttpResponse::Ok().json(ImageResponse {
        success: true,
        image_url,
    }))
}
