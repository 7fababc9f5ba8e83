//! PDF document: upload panel and upload-result summary
pub mod ui;
