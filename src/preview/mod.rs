//! Spreadsheet preview pipeline.
//!
//! This module provides:
//! - Decoding the first sheet of a workbook into a header + data-row grid
//! - Dropping fully-blank padding rows
//! - Display formatting for preview cells (currency, dates, placeholders)
//!
//! The preview is presentation-only: the decoded grid is never round-tripped
//! back into typed values. The original file, not the preview, is what gets
//! submitted to the API.

pub mod decoder;
pub mod format;
pub mod types;

// Re-export commonly used types and functions
pub use decoder::{decode_workbook, decode_workbook_from};
pub use format::{format_cell, format_currency};
pub use types::*;
