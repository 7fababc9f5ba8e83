//! Document Question Domain Module
//!
//! - provider.rs: AnswerProvider trait (точка подключения реальной LLM)
//! - stub_provider.rs: эвристический ответ без LLM
//! - service.rs: QaService, собирает ответ и фрагмент контекста

pub mod provider;
pub mod service;
pub mod stub_provider;

pub use provider::{AnswerError, AnswerProvider};
pub use service::{AnswerResult, QaService};
pub use stub_provider::StubAnswerProvider;
