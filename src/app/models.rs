//! Data models for extracted spreadsheet records
//!
//! This module contains the scalar cell value type delivered by the grid
//! collaborator and the record/collection types produced by the row mapper.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::warn;

// =============================================================================
// Cell Values
// =============================================================================

/// A scalar value held in one grid cell.
///
/// The grid collaborator decides the type of every cell; the extractor
/// performs no coercion, so a numeric-looking cell stays numeric all the way
/// into the output record. `Empty` is a present-but-blank cell, distinct from
/// a cell that is absent from its row entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Textual cell content
    Text(String),
    /// Numeric cell content
    Number(f64),
    /// Boolean cell content
    Bool(bool),
    /// Present but blank cell
    Empty,
}

// Index keys must hash consistently with equality. Floats hash by bit
// pattern with negative zero folded onto zero; NaN keys are never equal to
// anything, including themselves, and thus can never be looked up again.
impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            CellValue::Text(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            CellValue::Number(n) => {
                1u8.hash(state);
                let normalized = if *n == 0.0 { 0.0f64 } else { *n };
                normalized.to_bits().hash(state);
            }
            CellValue::Bool(b) => {
                2u8.hash(state);
                b.hash(state);
            }
            CellValue::Empty => 3u8.hash(state),
        }
    }
}

impl CellValue {
    /// Get the textual content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric content, if this is a number cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean content, if this is a bool cell
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Check whether this cell is present but blank
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

// =============================================================================
// Records
// =============================================================================

/// One extracted record: output field name to scalar value, produced from
/// exactly one source data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Source row index (1-based) this record was mapped from
    source_row: u32,

    /// Field values keyed by output field name
    values: HashMap<String, CellValue>,
}

impl Record {
    /// Create a record from its source row and extracted field values
    pub fn new(source_row: u32, values: HashMap<String, CellValue>) -> Self {
        Self { source_row, values }
    }

    /// Source row index (1-based) this record was mapped from
    pub fn source_row(&self) -> u32 {
        self.source_row
    }

    /// Get a field value by output field name
    pub fn value(&self, field: &str) -> Option<&CellValue> {
        self.values.get(field)
    }

    /// Get a field as text, if present and textual
    pub fn text(&self, field: &str) -> Option<&str> {
        self.value(field).and_then(CellValue::as_text)
    }

    /// Get a field as a number, if present and numeric
    pub fn number(&self, field: &str) -> Option<f64> {
        self.value(field).and_then(CellValue::as_number)
    }

    /// Get a field as a boolean, if present and boolean
    pub fn bool(&self, field: &str) -> Option<bool> {
        self.value(field).and_then(CellValue::as_bool)
    }

    /// Check whether a field holds exactly the expected value
    pub fn has_value(&self, field: &str, expected: impl Into<CellValue>) -> bool {
        self.value(field) == Some(&expected.into())
    }

    /// Number of fields extracted into this record
    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// Check whether a field was extracted for this record
    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Iterate over (field name, value) pairs in unspecified order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// =============================================================================
// Record Collection
// =============================================================================

/// Ordered collection of extracted records with optional keyed lookup.
///
/// Records append in source row order during mapping and the collection is
/// read-only afterward. When an index field is configured, each record is
/// additionally registered under that field's raw scalar value; duplicate
/// keys overwrite the earlier registration (last write wins) and log a
/// warning, while both records remain in sequential order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    /// Records in source row order
    records: Vec<Record>,

    /// Field whose values key the index, when configured
    index_field: Option<String>,

    /// Raw index value to position in `records`
    index: HashMap<CellValue, usize>,
}

impl RecordSet {
    /// Create an empty collection, optionally indexed by a field's values
    pub fn new(index_field: Option<String>) -> Self {
        Self {
            records: Vec::new(),
            index_field,
            index: HashMap::new(),
        }
    }

    /// Append a record, registering its index key when indexing is configured
    pub(crate) fn push(&mut self, record: Record) {
        let position = self.records.len();

        if let Some(field) = &self.index_field {
            if let Some(key) = record.value(field) {
                if let Some(previous) = self.index.insert(key.clone(), position) {
                    warn!(
                        "duplicate index value {:?} in row {} overwrites record from row {}",
                        key,
                        record.source_row(),
                        self.records[previous].source_row()
                    );
                }
            }
        }

        self.records.push(record);
    }

    /// Get a record by sequential position (0-based)
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Look up a record by its index field value.
    ///
    /// Returns `None` for unknown keys, never an error. Always `None` when no
    /// index field was configured.
    pub fn find(&self, key: &CellValue) -> Option<&Record> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    /// Field whose values key the index, if configured
    pub fn index_field(&self) -> Option<&str> {
        self.index_field.as_deref()
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in source row order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
