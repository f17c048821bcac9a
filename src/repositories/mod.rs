pub mod quiz_catalog;

pub use quiz_catalog::{QuizCatalog, StaticQuizCatalog};
