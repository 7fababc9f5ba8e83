use super::provider::{AnswerError, AnswerProvider};
use async_trait::async_trait;

const MIN_KEYWORD_LEN: usize = 4;

const STOP_WORDS: &[&str] = &[
    "what", "when", "where", "which", "whom", "whose", "that", "this",
];

/// Ответы без LLM: ищет первое предложение документа с ключевым словом вопроса
#[derive(Debug, Default, Clone)]
pub struct StubAnswerProvider;

impl StubAnswerProvider {
    pub fn new() -> Self {
        Self
    }

    fn keywords(question: &str) -> Vec<String> {
        question
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
            .filter(|word| !STOP_WORDS.contains(word))
            .map(str::to_string)
            .collect()
    }

    pub fn generate(question: &str, context: &str) -> String {
        if context.trim().is_empty() {
            return "I couldn't find any text in the document to answer your question."
                .to_string();
        }

        let context_lower = context.to_lowercase();
        let found: Vec<String> = Self::keywords(question)
            .into_iter()
            .filter(|kw| context_lower.contains(kw.as_str()))
            .collect();

        if !found.is_empty() {
            let sentence = context.split('.').find(|sentence| {
                let lower = sentence.to_lowercase();
                found.iter().any(|kw| lower.contains(kw.as_str()))
            });
            if let Some(sentence) = sentence {
                return format!(
                    "Based on the document: {}. (Note: This is a stub response. Integrate an LLM for better answers.)",
                    sentence.trim()
                );
            }
        }

        format!(
            "I found a document with {} characters of text. Your question was: '{}'. \
             (This is a stub response. To get intelligent answers, integrate an LLM API \
             like OpenAI GPT, or implement a RAG pipeline with embeddings.)",
            context.chars().count(),
            question
        )
    }
}

#[async_trait]
impl AnswerProvider for StubAnswerProvider {
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        Ok(Self::generate(question, context))
    }

    fn name(&self) -> &str {
        "stub"
    }
}
