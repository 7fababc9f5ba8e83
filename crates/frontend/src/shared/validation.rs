use thiserror::Error;

/// Media type accepted by the upload panel
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Ошибки проверки ввода на клиенте, до обращения к backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a PDF file")]
    NotPdf,

    #[error("Please select a file first")]
    NoFileSelected,

    #[error("Please enter a question")]
    EmptyQuestion,
}

pub fn validate_pdf_media_type(media_type: &str) -> Result<(), ValidationError> {
    if media_type == PDF_MEDIA_TYPE {
        Ok(())
    } else {
        Err(ValidationError::NotPdf)
    }
}

pub fn validate_question(input: &str) -> Result<&str, ValidationError> {
    let question = input.trim();
    if question.is_empty() {
        Err(ValidationError::EmptyQuestion)
    } else {
        Ok(question)
    }
}
