use super::provider::{AnswerError, AnswerProvider};
use super::stub_provider::StubAnswerProvider;
use crate::shared::format::truncate_with_ellipsis;
use std::sync::Arc;

/// Сколько символов документа возвращается как `context_used`
const CONTEXT_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub answer: String,
    pub context_used: String,
    pub document_id: String,
}

#[derive(Clone)]
pub struct QaService {
    provider: Arc<dyn AnswerProvider>,
}

impl Default for QaService {
    fn default() -> Self {
        Self::new(Arc::new(StubAnswerProvider::new()))
    }
}

impl QaService {
    pub fn new(provider: Arc<dyn AnswerProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Ответить на вопрос по тексту документа
    pub async fn answer_question(
        &self,
        question: &str,
        context: &str,
        document_id: &str,
    ) -> Result<AnswerResult, AnswerError> {
        tracing::debug!(
            "Answering question for {} via '{}' provider",
            document_id,
            self.provider.name()
        );

        let answer = self.provider.answer(question, context).await?;

        Ok(AnswerResult {
            answer,
            context_used: truncate_with_ellipsis(context, CONTEXT_SNIPPET_CHARS),
            document_id: document_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl AnswerProvider for FailingProvider {
        async fn answer(&self, _question: &str, _context: &str) -> Result<String, AnswerError> {
            Err(AnswerError::Unavailable("LLM unavailable".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_context_snippet_is_truncated() {
        let service = QaService::default();
        let context = "word ".repeat(100);

        let result = service
            .answer_question("anything", &context, "doc-1")
            .await
            .unwrap();

        assert_eq!(result.document_id, "doc-1");
        assert_eq!(result.context_used.chars().count(), CONTEXT_SNIPPET_CHARS + 3);
        assert!(result.context_used.ends_with("..."));
    }

    #[tokio::test]
    async fn test_short_context_kept_whole() {
        let service = QaService::default();
        let result = service
            .answer_question("anything", "Short text.", "doc-1")
            .await
            .unwrap();
        assert_eq!(result.context_used, "Short text.");
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let service = QaService::new(Arc::new(FailingProvider));
        let err = service
            .answer_question("q", "ctx", "doc-1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Provider not available: LLM unavailable");
        assert_eq!(service.provider_name(), "failing");
    }
}
