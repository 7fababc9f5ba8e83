//! PDF Document Domain Module
//!
//! Загруженный PDF документ: метаданные, которые backend возвращает после
//! извлечения текста.

pub mod aggregate;

pub use aggregate::UploadResponse;
