//! Sheet Extractor Library
//!
//! A Rust library for converting spreadsheet-like tabular grids into
//! normalized, field-renamed, optionally-indexed record collections.
//!
//! This library provides tools for:
//! - Canonicalizing raw header text for lenient column-name matching
//! - Resolving which source columns feed which output fields via a translation table
//! - Validating that mandatory fields are covered before any row is mapped
//! - Streaming data rows into typed records, optionally keyed by a field's value
//! - Validating source file references ahead of the grid-parsing collaborator
//!
//! The physical spreadsheet format is never parsed here: callers supply a
//! [`SheetGrid`] (or a [`GridSource`](app::adapters::source::GridSource)
//! collaborator that produces one) and receive a [`RecordSet`] back.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_extractor;
    }
    pub mod adapters {
        pub mod grid;
        pub mod source;
    }
}

// Re-export commonly used types
pub use app::adapters::grid::{MemoryGrid, SheetGrid};
pub use app::models::{CellValue, Record, RecordSet};
pub use app::services::record_extractor::SheetReader;
pub use config::{ExtractOptions, TranslationTable};

/// Result type alias for the sheet extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for extraction operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Extraction was invoked before any grid was supplied
    #[error("no grid is loaded")]
    NoGridLoaded,

    /// Source file reference rejected before opening (bad path, unreadable,
    /// not a regular file, unsupported extension)
    #[error("invalid source reference '{path}': {message}")]
    InvalidSourceReference {
        path: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Mandatory output fields could not be covered, either by the resolved
    /// header mapping or by an individual data row
    #[error("missing mandatory columns [{}]", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Two translation-table entries assign the same output field from
    /// different source headers
    #[error("output field '{field}' is assigned from both '{first}' and '{second}'")]
    AmbiguousMapping {
        field: String,
        first: String,
        second: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid source reference error
    pub fn invalid_source(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSourceReference {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid source reference error with an I/O cause
    pub fn invalid_source_io(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::InvalidSourceReference {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a missing columns error from the complete ordered missing list
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumns { missing }
    }

    /// Create an ambiguous mapping error
    pub fn ambiguous_mapping(
        field: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::AmbiguousMapping {
            field: field.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
