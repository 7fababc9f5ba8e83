use crate::domain::a001_pdf_document::DocumentService;
use crate::domain::a002_document_question::QaService;
use crate::shared::config::{self, Config};

/// Общее состояние приложения, передаётся в handlers через `State<Arc<AppState>>`
pub struct AppState {
    pub config: Config,
    pub documents: DocumentService,
    pub qa: QaService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upload_dir = config::get_upload_dir(&config);
        Self {
            documents: DocumentService::new(upload_dir),
            qa: QaService::default(),
            config,
        }
    }

    pub fn with_qa(config: Config, qa: QaService) -> Self {
        Self {
            qa,
            ..Self::new(config)
        }
    }
}
