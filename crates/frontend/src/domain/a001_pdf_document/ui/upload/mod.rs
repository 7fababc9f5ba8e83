//! PDF Upload UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: UploadForm state machine and PdfUploadVm with RwSignals
//! - view.rs: Main component PdfUpload

mod view;
mod view_model;

pub use view::PdfUpload;
pub use view_model::{PickedFile, UploadForm};
