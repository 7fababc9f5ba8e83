pub mod summary;
pub mod upload;
