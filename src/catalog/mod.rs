pub mod defaults;
pub mod model;
pub mod query;
pub mod store;
pub mod sync;

pub use model::{Complexity, Frequency, InterviewQuestion};
pub use query::SortMode;
pub use store::QuestionCatalog;

use thiserror::Error;

// User-facing messages stay in the page's language; logs are English.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Не удалось разобрать JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("В файле нет валидных вопросов.")]
    NoValidQuestions,
    #[error("Ошибка чтения файла: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Не задан FOLIO_QUESTIONS_SYNC_URL, синхронизация недоступна.")]
    SyncNotConfigured,
    #[error("{0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
