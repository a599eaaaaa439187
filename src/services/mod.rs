//! External service interactions
//!
//! This module contains services for talking to the outside world:
//! - Catalog fetching over HTTP
//! - Spreadsheet export

pub mod export;
pub mod fetch;

pub use export::{export_to_file, EXPORT_FILE_NAME, EXPORT_SHEET_NAME};
pub use fetch::{FetchMessage, Fetcher};
