//! Source file validation and the grid-opening collaborator seam
//!
//! Spreadsheet formats are parsed outside this crate. [`GridSource`] is the
//! contract a format-parsing collaborator fulfills; [`validate_source`] runs
//! the checks every source reference must pass before that collaborator is
//! asked to open it: the path exists, names a regular file, is readable, and
//! carries an accepted spreadsheet extension.

use crate::app::adapters::grid::MemoryGrid;
use crate::constants::VALID_SOURCE_EXTENSIONS;
use crate::{Error, Result};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Contract for collaborators that open a source reference into a grid.
///
/// Implementations own all format concerns (XLS/XLSX decoding, worksheet
/// selection, cell typing) and deliver a [`MemoryGrid`] snapshot.
pub trait GridSource {
    /// Open the validated source file and materialize its cell grid
    fn open_grid(&self, path: &Path) -> Result<MemoryGrid>;
}

/// Validate a source file reference ahead of the grid-opening collaborator.
///
/// Fails with [`Error::InvalidSourceReference`] when the path does not exist,
/// is not a regular file, cannot be opened for reading, or does not carry one
/// of the accepted spreadsheet extensions.
pub fn validate_source(path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(Error::invalid_source(display, "file does not exist"));
    }

    if !path.is_file() {
        return Err(Error::invalid_source(display, "not a regular file"));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match extension {
        Some(ext) if VALID_SOURCE_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(Error::invalid_source(
                display,
                format!(
                    "unsupported extension (expected one of: {})",
                    VALID_SOURCE_EXTENSIONS.join(", ")
                ),
            ));
        }
    }

    // Readability can only be proven by opening the file
    File::open(path)
        .map_err(|e| Error::invalid_source_io(&display, "file is not readable", e))?;

    let source_ref = display.as_str();
    debug!("validated source reference: {source_ref}");
    Ok(())
}
