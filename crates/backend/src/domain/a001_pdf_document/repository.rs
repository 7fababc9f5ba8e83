use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Обработанный документ, хранится до перезапуска процесса
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub document_id: String,
    pub filename: String,
    pub page_count: u32,
    pub text: String,
    pub file_path: PathBuf,
}

impl StoredDocument {
    /// Length of the extracted text in characters
    pub fn text_length(&self) -> u64 {
        self.text.chars().count() as u64
    }
}

#[derive(Debug, Default)]
pub struct DocumentRepository {
    documents: RwLock<HashMap<String, StoredDocument>>,
}

impl DocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, document: StoredDocument) {
        let mut map = self.documents.write().await;
        map.insert(document.document_id.clone(), document);
    }

    pub async fn find_text(&self, document_id: &str) -> Option<String> {
        let map = self.documents.read().await;
        map.get(document_id).map(|doc| doc.text.clone())
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, text: &str) -> StoredDocument {
        StoredDocument {
            document_id: id.to_string(),
            filename: "contract.pdf".to_string(),
            page_count: 2,
            text: text.to_string(),
            file_path: PathBuf::from(format!("uploads/{}.pdf", id)),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = DocumentRepository::new();
        repo.insert(sample("doc-1", "Section 9. Termination")).await;

        assert_eq!(
            repo.find_text("doc-1").await.as_deref(),
            Some("Section 9. Termination")
        );
        assert!(repo.find_text("doc-2").await.is_none());
        assert_eq!(repo.count().await, 1);
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert_eq!(sample("d", "абв").text_length(), 3);
    }
}
