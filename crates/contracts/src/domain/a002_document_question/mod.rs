//! Document Question Domain Module
//!
//! Вопросы к загруженному документу, ответы backend и записи переписки.

pub mod aggregate;

pub use aggregate::{ChatMessage, ChatRole, QuestionRequest, QuestionResponse};
