mod view;

pub use view::{summary_rows, DocumentSummary};
