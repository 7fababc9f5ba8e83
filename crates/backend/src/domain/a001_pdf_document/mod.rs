//! PDF Document Domain Module
//!
//! - extractor.rs: page count and text extraction
//! - repository.rs: in-memory storage of processed documents
//! - service.rs: save upload to disk, extract, register

pub mod extractor;
pub mod repository;
pub mod service;

pub use repository::{DocumentRepository, StoredDocument};
pub use service::DocumentService;
