pub mod a001_pdf_document;
pub mod a002_document_question;
pub mod system;
