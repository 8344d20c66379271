//! Extraction orchestration
//!
//! [`SheetReader`] owns the loaded grid and runs the whole pipeline for one
//! call: read the header row, resolve columns, gate on required fields, and
//! map data rows. Extraction is all-or-nothing; no partial collection is
//! ever returned.

use super::resolver::{check_required, resolve};
use super::row_mapper::map_rows;
use crate::app::adapters::grid::SheetGrid;
use crate::app::adapters::source::{GridSource, validate_source};
use crate::app::models::RecordSet;
use crate::config::ExtractOptions;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Reader converting a loaded sheet grid into record collections.
///
/// Holds at most one grid at a time; every [`extract`](Self::extract) call
/// operates on a snapshot of it and leaves no state behind, so one loaded
/// reader can serve any number of extraction calls with differing options.
#[derive(Default)]
pub struct SheetReader {
    grid: Option<Box<dyn SheetGrid + Send + Sync>>,
}

impl std::fmt::Debug for SheetReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetReader")
            .field("loaded", &self.grid.is_some())
            .finish()
    }
}

impl SheetReader {
    /// Create a reader with no grid loaded
    pub fn new() -> Self {
        Self { grid: None }
    }

    /// Supply the grid to extract from, replacing any previous one
    pub fn load(&mut self, grid: impl SheetGrid + Send + Sync + 'static) {
        self.grid = Some(Box::new(grid));
    }

    /// Validate a source file reference and load its grid through the
    /// format-parsing collaborator
    pub fn load_from_source(&mut self, source: &dyn GridSource, path: &Path) -> Result<()> {
        validate_source(path)?;
        let grid = source.open_grid(path)?;
        info!("loaded grid from {}: {} rows", path.display(), grid.row_count());
        self.grid = Some(Box::new(grid));
        Ok(())
    }

    /// Check whether a grid is currently loaded
    pub fn is_loaded(&self) -> bool {
        self.grid.is_some()
    }

    /// Extract records according to the given options.
    ///
    /// Fails with [`Error::NoGridLoaded`] when no grid has been supplied.
    /// An empty grid yields an empty collection. The index field, when set,
    /// is implicitly required: every mapped row must carry a value for it.
    pub fn extract(&self, options: &ExtractOptions) -> Result<RecordSet> {
        options.validate()?;

        let grid = self.grid.as_deref().ok_or(Error::NoGridLoaded)?;

        if grid.row_count() == 0 {
            debug!("grid is empty, returning empty record set");
            return Ok(RecordSet::new(options.index_field.clone()));
        }

        // The index value must exist in every row, so the index field joins
        // the required set when not already listed
        let mut required = options.required.clone();
        if let Some(index_field) = &options.index_field {
            if !required.contains(index_field) {
                required.push(index_field.clone());
            }
        }

        let header_row = read_header_texts(grid, options.header_row);
        let mapping = resolve(&options.translation, &header_row, options.canonize);
        check_required(&mapping, &required)?;

        let records = map_rows(
            grid,
            &mapping,
            &required,
            options.first_data_row,
            options.index_field.as_deref(),
        )?;

        info!(
            "extracted {} records across {} fields",
            records.len(),
            mapping.len()
        );

        Ok(records)
    }
}

/// Read the header row as (position, text) pairs in ascending column order.
///
/// Only text cells participate in name resolution; numeric or boolean
/// header cells are ignored like any other unmatched column.
fn read_header_texts(grid: &dyn SheetGrid, header_row: u32) -> Vec<(u32, String)> {
    grid.row_cells(header_row)
        .into_iter()
        .filter_map(|(position, value)| {
            value.as_text().map(|text| (position, text.to_string()))
        })
        .collect()
}
