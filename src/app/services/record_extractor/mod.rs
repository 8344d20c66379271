//! Record extraction engine for spreadsheet-like grids
//!
//! This module turns a raw cell grid into a normalized record collection:
//! header text is optionally canonicalized, matched against a translation
//! table to resolve which source column feeds which output field, gated on
//! mandatory field coverage, and data rows are then projected into typed
//! records.
//!
//! ## Architecture
//!
//! The engine is organized into logical components:
//! - [`extractor`] - Orchestration and grid lifecycle handling
//! - [`canonicalize`] - Header text normalization for lenient matching
//! - [`resolver`] - Column resolution and mandatory field checking
//! - [`row_mapper`] - Data row projection into records
//!
//! ## Usage
//!
//! ```rust
//! use sheet_extractor::{ExtractOptions, MemoryGrid, SheetReader, TranslationTable};
//!
//! # fn example() -> sheet_extractor::Result<()> {
//! let grid = MemoryGrid::from_rows(vec![
//!     vec!["Product Name", "Unit Price"],
//!     vec!["Widget", "Gadget"],
//! ]);
//!
//! let translation = TranslationTable::new([
//!     ("product_name", "name"),
//!     ("unit_price", "price"),
//! ])?;
//! let mut options = ExtractOptions::new(translation);
//! options.canonize = true;
//!
//! let mut reader = SheetReader::new();
//! reader.load(grid);
//! let records = reader.extract(&options)?;
//!
//! println!("extracted {} records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod canonicalize;
pub mod extractor;
pub mod resolver;
pub mod row_mapper;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use canonicalize::canonicalize;
pub use extractor::SheetReader;
pub use resolver::{ResolvedMapping, check_required, resolve};
pub use row_mapper::map_rows;
