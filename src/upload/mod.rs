//! Spreadsheet upload submission.
//!
//! The original file bytes (never the parsed preview) are posted as a
//! multipart form to the endpoint of the selected upload type. The server
//! may report partial success: a created-record count alongside row-level
//! error strings. Both are surfaced; nothing is rolled back or retried.

pub mod submit;
pub mod types;

pub use submit::submit_upload;
pub use types::*;
