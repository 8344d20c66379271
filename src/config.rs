//! Extraction configuration and validation.
//!
//! Provides the translation table mapping source header names to output
//! field names, and the options struct passed once per extraction call.

use crate::constants::{DEFAULT_FIRST_DATA_ROW, DEFAULT_HEADER_ROW};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Translation Table
// =============================================================================

/// Ordered mapping from expected source header name to output field name.
///
/// Entry order is significant: the resolved mapping and therefore every
/// output record follows it, regardless of source column order. Construction
/// rejects duplicate source headers and two headers assigned to the same
/// output field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct TranslationTable {
    entries: Vec<(String, String)>,
}

impl TranslationTable {
    /// Build a table from (source header, output field) pairs.
    ///
    /// When header canonicalization is enabled at extraction time, the source
    /// header keys given here are assumed to already be canonical.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();

        for (key, field) in pairs {
            let key = key.into();
            let field = field.into();

            if key.is_empty() {
                return Err(Error::configuration(format!(
                    "empty source header for output field '{field}'"
                )));
            }
            if field.is_empty() {
                return Err(Error::configuration(format!(
                    "empty output field for source header '{key}'"
                )));
            }
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(Error::configuration(format!(
                    "duplicate source header '{key}'"
                )));
            }
            if let Some((first, _)) = entries.iter().find(|(_, f)| *f == field) {
                return Err(Error::ambiguous_mapping(field, first.clone(), key));
            }

            entries.push((key, field));
        }

        Ok(Self { entries })
    }

    /// Output field assigned to a source header, if the header is known
    pub fn field_for(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, field)| field.as_str())
    }

    /// Iterate (source header, output field) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, field)| (key.as_str(), field.as_str()))
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(String, String)>> for TranslationTable {
    type Error = Error;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl From<TranslationTable> for Vec<(String, String)> {
    fn from(table: TranslationTable) -> Self {
        table.entries
    }
}

// =============================================================================
// Extraction Options
// =============================================================================

/// Configuration for one extraction call.
///
/// A plain struct handed to [`SheetReader::extract`](crate::SheetReader::extract)
/// once per invocation; the reader itself stays stateless across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Source header to output field translation
    pub translation: TranslationTable,

    /// Output fields that must be covered by the resolved mapping,
    /// in error-reporting order
    #[serde(default)]
    pub required: Vec<String>,

    /// Field whose values key the result collection, when set
    #[serde(default)]
    pub index_field: Option<String>,

    /// Canonicalize header text before matching (lowercase, separator
    /// collapsing, accent stripping); otherwise match verbatim
    #[serde(default)]
    pub canonize: bool,

    /// Row holding the column display names (1-based)
    #[serde(default = "default_header_row")]
    pub header_row: u32,

    /// First row holding data records (1-based)
    #[serde(default = "default_first_data_row")]
    pub first_data_row: u32,
}

fn default_header_row() -> u32 {
    DEFAULT_HEADER_ROW
}

fn default_first_data_row() -> u32 {
    DEFAULT_FIRST_DATA_ROW
}

impl ExtractOptions {
    /// Create options for the given translation with default layout:
    /// headers in row 1, data from row 2, no required fields, no index,
    /// verbatim header matching.
    pub fn new(translation: TranslationTable) -> Self {
        Self {
            translation,
            required: Vec::new(),
            index_field: None,
            canonize: false,
            header_row: DEFAULT_HEADER_ROW,
            first_data_row: DEFAULT_FIRST_DATA_ROW,
        }
    }

    /// Validate layout offsets for consistency
    pub fn validate(&self) -> Result<()> {
        if self.header_row == 0 {
            return Err(Error::configuration("header row must be 1 or greater"));
        }
        if self.first_data_row <= self.header_row {
            return Err(Error::configuration(format!(
                "first data row {} must come after header row {}",
                self.first_data_row, self.header_row
            )));
        }
        Ok(())
    }
}
