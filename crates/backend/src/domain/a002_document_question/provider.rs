use async_trait::async_trait;
use thiserror::Error;

/// Ошибки провайдера ответов
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider not available: {0}")]
    Unavailable(String),
}

/// Трейт для провайдеров ответов на вопросы по документу
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Ответить на вопрос, используя текст документа как контекст
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError>;

    /// Имя провайдера для логов
    fn name(&self) -> &str;
}
