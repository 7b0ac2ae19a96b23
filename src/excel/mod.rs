//! Excel ingestion module
//!
//! Wraps calamine behind a small reader type that turns one workbook's
//! sheets into [`crate::types::Table`] values.

mod reader;

pub use reader::WorkbookReader;
