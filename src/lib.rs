//! csrboard - workbook table store for a CSR reporting dashboard
//!
//! This library ingests the program office's two Excel workbooks into an
//! immutable in-memory store of named tables, and resolves loose
//! human-authored program labels to the right sheet.
//!
//! # Features
//!
//! - One-shot ingestion of every non-empty sheet from both workbooks
//! - Composite `{prefix}_{sheet name}` keys across the two sources
//! - Layered program-name resolution (exact, underscore/space, substring)
//! - Master-data discovery
//! - Schema probing and optional aggregates for KPI figures
//!
//! # Example
//!
//! ```no_run
//! use csrboard::config::Config;
//! use csrboard::store::TableStore;
//!
//! let config = Config::default();
//! let store = TableStore::load(&config.sources())?;
//!
//! println!("Sheets: {}", store.len());
//! if let Some(table) = store.resolve_program("Kishori_Express") {
//!     println!("{}: {} rows", table.name(), table.row_count());
//! }
//! # Ok::<(), csrboard::error::BoardError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod probe;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{BoardError, BoardResult};
pub use store::{TableStore, WorkbookSource};
pub use types::{CellValue, Table};
