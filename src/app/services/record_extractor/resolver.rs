//! Column resolution and mandatory field checking
//!
//! Matches header cell text against the translation table to decide which
//! source column feeds which output field, and gates extraction on the
//! required fields being covered.

use super::canonicalize::canonicalize;
use crate::config::TranslationTable;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Mapping from output field name to source column position.
///
/// Built once per extraction and immutable afterward. Entry order follows
/// the translation table, not source column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    entries: Vec<(String, u32)>,
}

impl ResolvedMapping {
    /// Source column position feeding an output field, if resolved
    pub fn position(&self, field: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|&(_, position)| position)
    }

    /// Check whether an output field was resolved
    pub fn contains_field(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    /// Iterate (output field, source column position) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(field, position)| (field.as_str(), *position))
    }

    /// Number of resolved fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing was resolved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve which source column feeds which output field.
///
/// `header_row` holds the (position, raw text) pairs read from the grid's
/// header row in ascending column order. With `canonize` set, each header
/// passes through [`canonicalize`] before lookup and the translation keys
/// are assumed already canonical; otherwise matching is verbatim and
/// case-sensitive. Source columns with no translation entry are discarded
/// silently: extra or interleaved columns must not break extraction.
/// Duplicate header text across positions keeps the last-seen position.
pub fn resolve(
    translation: &TranslationTable,
    header_row: &[(u32, String)],
    canonize: bool,
) -> ResolvedMapping {
    // Later positions overwrite earlier ones for identical header text
    let mut position_by_header: HashMap<String, u32> = HashMap::new();
    let mut discarded = 0usize;
    for (position, raw) in header_row {
        let text = if canonize {
            canonicalize(raw)
        } else {
            raw.clone()
        };
        if translation.field_for(&text).is_none() {
            discarded += 1;
        }
        position_by_header.insert(text, *position);
    }

    let mut entries = Vec::new();
    for (key, field) in translation.iter() {
        if let Some(&position) = position_by_header.get(key) {
            entries.push((field.to_string(), position));
        }
    }

    debug!(
        "resolved {} of {} translation entries from {} header cells ({} discarded)",
        entries.len(),
        translation.len(),
        header_row.len(),
        discarded
    );

    ResolvedMapping { entries }
}

/// Verify the resolved mapping covers every required output field.
///
/// Collects the complete missing set in one pass, in required-field order,
/// so the resulting [`Error::MissingColumns`] is actionable in a single
/// round-trip.
pub fn check_required(resolved: &ResolvedMapping, required: &[String]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !resolved.contains_field(field))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_columns(missing))
    }
}
