use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Тело запроса POST /ask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub document_id: String,
    pub question: String,
}

impl QuestionRequest {
    pub fn new(document_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            question: question.into(),
        }
    }

    /// Only the question is checked; an unknown (or empty) document id is
    /// the store's business and ends up as 404.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Question must not be empty".into());
        }
        Ok(())
    }
}

/// Ответ backend на вопрос
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Echo of the question as received.
    pub question: String,
    pub answer: String,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_used: Option<String>,
}

/// Роль сообщения в переписке
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Label shown above the message bubble.
    pub fn sender_label(&self) -> &str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "AI Assistant",
        }
    }
}

/// Запись переписки (transcript entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// `id` is `<creation time, ms>-<seq>`; `seq` is the caller's per-session counter.
    fn created_now(seq: u64, role: ChatRole, content: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("{}-{}", timestamp.timestamp_millis(), seq),
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Создать сообщение пользователя
    pub fn user(seq: u64, content: impl Into<String>) -> Self {
        Self::created_now(seq, ChatRole::User, content)
    }

    /// Создать сообщение ассистента
    pub fn assistant(seq: u64, content: impl Into<String>) -> Self {
        Self::created_now(seq, ChatRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = QuestionRequest::new("doc-1", "What is the termination clause?");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "document_id": "doc-1",
                "question": "What is the termination clause?"
            })
        );
    }

    #[test]
    fn test_validate_blank_question() {
        assert!(QuestionRequest::new("doc-1", "   \n").validate().is_err());
        assert!(QuestionRequest::new("", "why?").validate().is_ok());
        assert!(QuestionRequest::new("doc-1", "why?").validate().is_ok());
    }

    #[test]
    fn test_context_used_is_optional() {
        let missing = r#"{"question":"q","answer":"Section 9.","document_id":"doc-1"}"#;
        let resp: QuestionResponse = serde_json::from_str(missing).unwrap();
        assert_eq!(resp.answer, "Section 9.");
        assert_eq!(resp.context_used, None);

        let null = r#"{"question":"q","answer":"a","document_id":"d","context_used":null}"#;
        let resp: QuestionResponse = serde_json::from_str(null).unwrap();
        assert_eq!(resp.context_used, None);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::from_str::<ChatRole>("\"assistant\"").unwrap(),
            ChatRole::Assistant
        );
        assert_eq!(ChatRole::Assistant.sender_label(), "AI Assistant");
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user(7, "hello");
        assert!(msg.is_user());
        assert_eq!(msg.content, "hello");
        assert_eq!(
            msg.id,
            format!("{}-7", msg.timestamp.timestamp_millis())
        );

        let reply = ChatMessage::assistant(8, "hi");
        assert!(!reply.is_user());
        assert!(reply.id.ends_with("-8"));
        assert_ne!(msg.id, reply.id);
    }
}
