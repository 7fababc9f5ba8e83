//! PDF Upload - View Model

use crate::shared::api_error::ApiError;
use crate::shared::validation::{validate_pdf_media_type, ValidationError};
use contracts::domain::a001_pdf_document::UploadResponse;
use leptos::prelude::*;

/// Файл, выбранный пользователем
///
/// Implemented for `web_sys::File`; tests use a plain struct.
pub trait PickedFile: Clone {
    fn name(&self) -> String;
    fn media_type(&self) -> String;
}

impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

/// Состояние формы загрузки
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    selected: Option<F>,
    uploading: bool,
    error: Option<String>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            selected: None,
            uploading: false,
            error: None,
        }
    }
}

impl<F: PickedFile> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selected.as_ref().map(|f| f.name())
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_pick(&self) -> bool {
        !self.uploading
    }

    pub fn can_upload(&self) -> bool {
        !self.uploading && self.selected.is_some()
    }

    /// Пользователь выбрал файл в picker'е. `None` (отмена выбора) ничего не меняет.
    pub fn select(&mut self, file: Option<F>) {
        let Some(file) = file else {
            return;
        };

        match validate_pdf_media_type(&file.media_type()) {
            Ok(()) => {
                self.selected = Some(file);
                self.error = None;
            }
            Err(e) => {
                self.selected = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Начать загрузку. Возвращает файл для сетевого вызова.
    pub fn begin_upload(&mut self) -> Option<F> {
        if self.uploading {
            return None;
        }

        let Some(file) = self.selected.clone() else {
            self.error = Some(ValidationError::NoFileSelected.to_string());
            return None;
        };

        self.uploading = true;
        self.error = None;
        Some(file)
    }

    /// Завершить загрузку. On success the response is handed back for the
    /// parent's callback.
    pub fn finish(&mut self, result: Result<UploadResponse, ApiError>) -> Option<UploadResponse> {
        self.uploading = false;

        match result {
            Ok(response) => {
                self.selected = None;
                Some(response)
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.trim().is_empty() {
                    "Upload failed".to_string()
                } else {
                    message
                });
                None
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct PdfUploadVm {
    pub form: RwSignal<UploadForm<web_sys::File>, LocalStorage>,
}

impl PdfUploadVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new_local(UploadForm::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        name: &'static str,
        media_type: &'static str,
    }

    impl PickedFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn media_type(&self) -> String {
            self.media_type.to_string()
        }
    }

    fn contract_pdf() -> FakeFile {
        FakeFile {
            name: "contract.pdf",
            media_type: "application/pdf",
        }
    }

    fn upload_response() -> UploadResponse {
        UploadResponse {
            document_id: "doc-1".into(),
            filename: "contract.pdf".into(),
            page_count: 12,
            text_length: 4096,
            message: "PDF uploaded and processed successfully".into(),
        }
    }

    #[test]
    fn test_text_file_is_rejected() {
        let mut form = UploadForm::new();
        form.select(Some(FakeFile {
            name: "notes.txt",
            media_type: "text/plain",
        }));

        assert_eq!(form.error(), Some("Please select a PDF file"));
        assert!(form.selected().is_none());
        assert!(!form.can_upload());
    }

    #[test]
    fn test_invalid_pick_clears_previous_selection() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));
        form.select(Some(FakeFile {
            name: "scan.png",
            media_type: "image/png",
        }));
        assert!(form.selected().is_none());
    }

    #[test]
    fn test_valid_pick_clears_error() {
        let mut form = UploadForm::new();
        form.select(Some(FakeFile {
            name: "notes.txt",
            media_type: "text/plain",
        }));
        form.select(Some(contract_pdf()));

        assert_eq!(form.error(), None);
        assert_eq!(form.selected_name().as_deref(), Some("contract.pdf"));
        assert!(form.can_upload());
    }

    #[test]
    fn test_cancelled_pick_keeps_state() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));
        form.select(None);
        assert_eq!(form.selected(), Some(&contract_pdf()));
    }

    #[test]
    fn test_upload_without_file() {
        let mut form: UploadForm<FakeFile> = UploadForm::new();
        assert_eq!(form.begin_upload(), None);
        assert_eq!(form.error(), Some("Please select a file first"));
        assert!(!form.is_uploading());
    }

    #[test]
    fn test_successful_upload() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));

        let file = form.begin_upload();
        assert_eq!(file, Some(contract_pdf()));
        assert!(form.is_uploading());
        assert!(!form.can_pick());
        assert!(!form.can_upload());

        let response = form.finish(Ok(upload_response()));
        assert_eq!(response, Some(upload_response()));
        assert!(!form.is_uploading());
        assert!(form.selected().is_none());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_no_second_upload_while_busy() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));
        assert!(form.begin_upload().is_some());
        assert!(form.begin_upload().is_none());
    }

    #[test]
    fn test_failed_upload_keeps_selection() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));
        form.begin_upload();

        let response = form.finish(Err(ApiError::from_error_body(
            400,
            r#"{"detail":"Only PDF files are supported"}"#,
            "Upload failed",
        )));

        assert_eq!(response, None);
        assert!(!form.is_uploading());
        assert_eq!(form.error(), Some("Only PDF files are supported"));
        assert!(form.can_upload());
    }

    #[test]
    fn test_failed_upload_without_detail() {
        let mut form = UploadForm::new();
        form.select(Some(contract_pdf()));
        form.begin_upload();
        form.finish(Err(ApiError::from_error_body(502, "", "Upload failed")));
        assert_eq!(form.error(), Some("Upload failed"));
    }
}
