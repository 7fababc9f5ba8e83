use super::extractor;
use super::repository::{DocumentRepository, StoredDocument};
use std::path::PathBuf;
use uuid::Uuid;

/// Сервис загрузки и обработки PDF
#[derive(Debug)]
pub struct DocumentService {
    upload_dir: PathBuf,
    repository: DocumentRepository,
}

impl DocumentService {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self {
            upload_dir,
            repository: DocumentRepository::new(),
        }
    }

    pub fn repository(&self) -> &DocumentRepository {
        &self.repository
    }

    /// Сохранить PDF на диск, извлечь текст и зарегистрировать документ
    ///
    /// The saved file is removed again when extraction fails.
    pub async fn save_and_process(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> anyhow::Result<StoredDocument> {
        let document_id = Uuid::new_v4().to_string();

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let file_path = self.upload_dir.join(format!("{}.pdf", document_id));
        tokio::fs::write(&file_path, &content).await?;

        let extracted = tokio::task::spawn_blocking(move || extractor::extract(&content))
            .await
            .map_err(|e| anyhow::anyhow!("PDF extraction task failed: {}", e))
            .and_then(|result| result);

        let extracted = match extracted {
            Ok(v) => v,
            Err(e) => {
                if let Err(rm_err) = tokio::fs::remove_file(&file_path).await {
                    tracing::warn!(
                        "Failed to remove {} after extraction error: {}",
                        file_path.display(),
                        rm_err
                    );
                }
                return Err(e);
            }
        };

        let document = StoredDocument {
            document_id,
            filename: filename.to_string(),
            page_count: extracted.page_count,
            text: extracted.text,
            file_path,
        };

        tracing::info!(
            "Processed '{}' as {}: {} pages, {} chars",
            document.filename,
            document.document_id,
            document.page_count,
            document.text_length()
        );

        self.repository.insert(document.clone()).await;
        Ok(document)
    }

    pub async fn get_document_text(&self, document_id: &str) -> Option<String> {
        self.repository.find_text(document_id).await
    }
}
