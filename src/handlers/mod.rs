pub mod image_handler;
pub mod quiz_handler;
pub mod story_handler;
pub mod system_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use image_handler::generate_image;
pub use quiz_handler::get_quiz;
pub use story_handler::generate_story;
pub use system_handler::{health_check, root};

/// Registers every API route. Static files are mounted separately by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error),
    )
        .service(root)
        .service(health_check)
        .service(generate_story)
        .service(generate_image)
        .service(get_quiz);
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}
