//! CLI command handlers

pub mod commands;

pub use commands::{masters, program, sheets, show, summary};
