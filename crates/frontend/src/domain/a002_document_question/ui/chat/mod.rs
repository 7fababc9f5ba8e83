//! Document Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - session.rs: ChatSession state machine (transcript, loading, generation)
//! - view_model.rs: DocumentChatVm with RwSignals
//! - view.rs: Main component DocumentChat

mod session;
mod view;
mod view_model;

pub use session::{is_submit_key, ActiveDocument, ChatSession, PendingQuestion, SendRefused};
pub use view::DocumentChat;
pub use view_model::DocumentChatVm;
