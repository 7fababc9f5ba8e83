use crate::domain::a002_document_question::ui::chat::ActiveDocument;
use contracts::domain::a001_pdf_document::UploadResponse;
use leptos::prelude::*;

/// Состояние рабочей области: какой документ сейчас активен
///
/// Only the root composition mutates it; panels receive the active
/// document read-only and report back through callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    active_document: Option<UploadResponse>,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_upload_success(&mut self, response: UploadResponse) {
        self.active_document = Some(response);
    }

    /// Вернуться к исходному состоянию (загрузка другого документа)
    pub fn reset(&mut self) {
        self.active_document = None;
    }

    pub fn active_document(&self) -> Option<&UploadResponse> {
        self.active_document.as_ref()
    }

    pub fn document_id(&self) -> Option<&str> {
        self.active_document.as_ref().map(|d| d.document_id.as_str())
    }

    pub fn document_name(&self) -> Option<&str> {
        self.active_document.as_ref().map(|d| d.filename.as_str())
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub workspace: RwSignal<WorkspaceState>,
    /// Bumped on reset so the upload panel is remounted with fresh state.
    pub upload_epoch: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            workspace: RwSignal::new(WorkspaceState::new()),
            upload_epoch: RwSignal::new(0),
        }
    }

    pub fn on_upload_success(&self, response: UploadResponse) {
        log::info!(
            "Document '{}' uploaded as {}",
            response.filename,
            response.document_id
        );
        self.workspace.update(|ws| ws.on_upload_success(response));
    }

    pub fn reset(&self) {
        self.workspace.update(|ws| ws.reset());
        self.upload_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
    }

    pub fn active_document(&self) -> Signal<Option<UploadResponse>> {
        let workspace = self.workspace;
        Signal::derive(move || workspace.with(|ws| ws.active_document().cloned()))
    }

    /// Документ для панели переписки; `None` держит панель выключенной
    pub fn conversation_document(&self) -> Signal<Option<ActiveDocument>> {
        let workspace = self.workspace;
        Signal::derive(move || {
            workspace.with(|ws| {
                ws.document_id()
                    .zip(ws.document_name())
                    .map(|(id, name)| ActiveDocument::new(id, name))
            })
        })
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
