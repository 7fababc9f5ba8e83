//! Document Chat - Session
//!
//! Transcript and loading flag for one conversation panel. Every question
//! carries the generation it was asked in; switching document bumps the
//! generation, so an answer that arrives afterwards is dropped instead of
//! landing in the new transcript.

use crate::shared::api_error::ApiError;
use crate::shared::validation::{validate_question, ValidationError};
use contracts::domain::a002_document_question::{ChatMessage, QuestionResponse};
use thiserror::Error;

const GENERIC_ANSWER_ERROR: &str = "Failed to get answer";

/// Документ, по которому ведется переписка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub id: String,
    pub name: String,
}

impl ActiveDocument {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Вопрос, отправленный на backend и ожидающий ответа
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub document_id: String,
    pub question: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRefused {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("No document is loaded")]
    NoDocument,

    #[error("Waiting for the previous answer")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    document: Option<ActiveDocument>,
    messages: Vec<ChatMessage>,
    loading: bool,
    generation: u64,
    next_seq: u64,
}

impl ChatSession {
    pub fn new(document: Option<ActiveDocument>) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&ActiveDocument> {
        self.document.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.document.is_some()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_send(&self, input: &str) -> bool {
        self.is_enabled() && !self.loading && !input.trim().is_empty()
    }

    /// Сменить активный документ. Переписка очищается, ожидаемый ответ
    /// больше не будет принят.
    pub fn switch_document(&mut self, document: Option<ActiveDocument>) {
        self.document = document;
        self.messages.clear();
        self.loading = false;
        self.generation += 1;
    }

    /// Принять ввод пользователя: добавить сообщение и вернуть вопрос для отправки.
    pub fn begin_send(&mut self, input: &str) -> Result<PendingQuestion, SendRefused> {
        let question = validate_question(input)?.to_string();
        let document_id = match &self.document {
            Some(doc) => doc.id.clone(),
            None => return Err(SendRefused::NoDocument),
        };
        if self.loading {
            return Err(SendRefused::Busy);
        }

        let seq = self.next_seq();
        self.messages.push(ChatMessage::user(seq, input));
        self.loading = true;

        Ok(PendingQuestion {
            document_id,
            question,
            generation: self.generation,
        })
    }

    /// Принять результат запроса. Returns `false` when the result belongs
    /// to an earlier generation and was dropped.
    pub fn settle(
        &mut self,
        pending: &PendingQuestion,
        result: Result<QuestionResponse, ApiError>,
    ) -> bool {
        if pending.generation != self.generation {
            return false;
        }

        let content = match result {
            Ok(response) => response.answer,
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    format!("Error: {}", GENERIC_ANSWER_ERROR)
                } else {
                    format!("Error: {}", message)
                }
            }
        };

        let seq = self.next_seq();
        self.messages.push(ChatMessage::assistant(seq, content));
        self.loading = false;
        true
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Enter отправляет вопрос, Shift+Enter переносит строку
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
