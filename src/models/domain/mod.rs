pub mod quiz;
pub use quiz::{QuizQuestion, QuizTopic};
