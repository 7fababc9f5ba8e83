//! Document Chat - View Model

use super::session::{ActiveDocument, ChatSession};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentChatVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
}

impl DocumentChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new(None)),
            input: RwSignal::new(String::new()),
        }
    }

    /// Синхронизировать сессию с активным документом
    pub fn sync_document(&self, document: Option<ActiveDocument>) {
        let changed = self
            .session
            .with_untracked(|s| s.document() != document.as_ref());
        if changed {
            self.session.update(|s| s.switch_document(document));
            self.input.set(String::new());
        }
    }
}

impl Default for DocumentChatVm {
    fn default() -> Self {
        Self::new()
    }
}
