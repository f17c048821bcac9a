pub mod image_retention;
pub mod image_service;
pub mod quiz_service;
pub mod story_service;
