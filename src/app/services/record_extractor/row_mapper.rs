//! Data row projection into records
//!
//! Walks data rows from the configured start offset and projects each one
//! through the resolved mapping into a [`Record`], re-validating required
//! fields against what every individual row actually delivers.

use super::resolver::ResolvedMapping;
use crate::app::adapters::grid::SheetGrid;
use crate::app::models::{Record, RecordSet};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Map data rows into an ordered, optionally indexed record collection.
///
/// Row indices run from `start_row` through the grid's maximum row
/// inclusive; indices absent from the grid are skipped (sparse grids are
/// allowed, not an error). For each present row every resolved entry is
/// looked up at that row; an absent cell simply omits the field, after which
/// the requested required-field list is checked against what was actually
/// extracted. Any gap fails the whole extraction with the complete per-row
/// missing list — no partial collection escapes. Cell values keep the type
/// the grid delivered; no coercion happens here.
///
/// `required` is expected to already include the index field; the extractor
/// appends it before calling.
pub fn map_rows(
    grid: &dyn SheetGrid,
    resolved: &ResolvedMapping,
    required: &[String],
    start_row: u32,
    index_field: Option<&str>,
) -> Result<RecordSet> {
    let mut records = RecordSet::new(index_field.map(String::from));
    let last_row = grid.row_count();

    if start_row > last_row {
        debug!("no data rows: start row {} is past row count {}", start_row, last_row);
        return Ok(records);
    }

    let mut skipped = 0usize;
    for row in start_row..=last_row {
        if !grid.has_row(row) {
            skipped += 1;
            continue;
        }

        let mut values = HashMap::with_capacity(resolved.len());
        for (field, position) in resolved.iter() {
            if let Some(value) = grid.cell(row, position) {
                values.insert(field.to_string(), value.clone());
            }
        }

        let missing: Vec<String> = required
            .iter()
            .filter(|field| !values.contains_key(*field))
            .cloned()
            .collect();
        if !missing.is_empty() {
            debug!("row {} is missing required fields: {:?}", row, missing);
            return Err(Error::missing_columns(missing));
        }

        records.push(Record::new(row, values));
    }

    debug!(
        "mapped {} records from rows {}..={} ({} sparse rows skipped)",
        records.len(),
        start_row,
        last_row,
        skipped
    );

    Ok(records)
}
