//! Shared data contracts between the PDF QA client and backend.
//!
//! Every type here is exchanged verbatim as JSON over HTTP; field names are
//! part of the wire format.

pub mod domain;
pub mod shared;
