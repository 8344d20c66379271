//! Tests for extraction orchestration

use super::{product_grid, product_options, product_translation};
use crate::app::adapters::grid::MemoryGrid;
use crate::app::adapters::source::GridSource;
use crate::app::models::CellValue;
use crate::app::services::record_extractor::SheetReader;
use crate::config::ExtractOptions;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;

#[test]
fn test_extract_before_load_fails() {
    let reader = SheetReader::new();
    let err = reader.extract(&product_options()).unwrap_err();

    assert!(matches!(err, Error::NoGridLoaded));
}

#[test]
fn test_extract_full_pipeline() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());
    assert!(reader.is_loaded());

    let records = reader.extract(&product_options()).unwrap();

    assert_eq!(records.len(), 3);
    let widget = records.get(0).unwrap();
    assert!(widget.has_value("name", "Widget"));
    assert!(widget.has_value("price", 9.99));
    assert!(widget.has_value("stock", true));

    // The interleaved "Internal Ref" column never reaches the output
    for record in &records {
        assert_eq!(record.field_count(), 3);
        assert!(!record.contains_field("internal_ref"));
    }
}

#[test]
fn test_extract_with_index_field() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());

    let mut options = product_options();
    options.index_field = Some("name".to_string());
    let records = reader.extract(&options).unwrap();

    let gadget = records.find(&CellValue::from("Gadget")).unwrap();
    assert!(gadget.has_value("price", 24.5));
    assert!(records.find(&CellValue::from("Doohickey")).is_none());
}

#[test]
fn test_extract_index_field_is_implicitly_required() {
    let mut grid = product_grid();
    // Row 5 lacks the name column
    grid.set_cell(5, 3, 1.25);
    grid.set_cell(5, 4, false);

    let mut reader = SheetReader::new();
    reader.load(grid);

    let mut options = product_options();
    options.index_field = Some("name".to_string());
    let err = reader.extract(&options).unwrap_err();

    match err {
        Error::MissingColumns { missing } => {
            assert_eq!(missing, vec!["name".to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_extract_missing_required_column_lists_all() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());

    let mut options = product_options();
    options.required = vec![
        "name".to_string(),
        "weight".to_string(),
        "color".to_string(),
    ];
    let err = reader.extract(&options).unwrap_err();

    match err {
        Error::MissingColumns { missing } => {
            assert_eq!(missing, vec!["weight".to_string(), "color".to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_extract_empty_grid_yields_empty_set() {
    let mut reader = SheetReader::new();
    reader.load(MemoryGrid::new());

    let mut options = product_options();
    options.index_field = Some("name".to_string());
    let records = reader.extract(&options).unwrap();

    assert!(records.is_empty());
    assert_eq!(records.index_field(), Some("name"));
}

#[test]
fn test_extract_rejects_invalid_offsets() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());

    let mut options = product_options();
    options.first_data_row = 1;
    let err = reader.extract(&options).unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_extract_verbatim_requires_exact_headers() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());

    // Same translation, canonicalization off: display headers no longer match
    let mut options = ExtractOptions::new(product_translation());
    options.canonize = false;
    options.required = vec!["name".to_string()];
    let err = reader.extract(&options).unwrap_err();

    assert!(matches!(err, Error::MissingColumns { .. }));
}

#[test]
fn test_extract_custom_header_offset() {
    let mut grid = MemoryGrid::new();
    // Two banner rows above the real header
    grid.set_cell(1, 1, "Quarterly Report");
    grid.set_cell(3, 1, "product_name");
    grid.set_cell(3, 2, "unit_price");
    grid.set_cell(4, 1, "Widget");
    grid.set_cell(4, 2, 9.99);

    let mut reader = SheetReader::new();
    reader.load(grid);

    let mut options = product_options();
    options.header_row = 3;
    options.first_data_row = 4;
    let records = reader.extract(&options).unwrap();

    assert_eq!(records.len(), 1);
    assert!(records.get(0).unwrap().has_value("name", "Widget"));
}

#[test]
fn test_reload_replaces_grid() {
    let mut reader = SheetReader::new();
    reader.load(product_grid());
    assert_eq!(reader.extract(&product_options()).unwrap().len(), 3);

    reader.load(MemoryGrid::new());
    assert!(reader.extract(&product_options()).unwrap().is_empty());
}

/// Stand-in for a format-parsing collaborator
struct StubSource {
    grid: MemoryGrid,
}

impl GridSource for StubSource {
    fn open_grid(&self, _path: &Path) -> Result<MemoryGrid> {
        Ok(self.grid.clone())
    }
}

#[test]
fn test_load_from_source_validates_then_delegates() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(b"stub").unwrap();

    let source = StubSource {
        grid: product_grid(),
    };
    let mut reader = SheetReader::new();
    reader.load_from_source(&source, file.path()).unwrap();

    assert!(reader.is_loaded());
    assert_eq!(reader.extract(&product_options()).unwrap().len(), 3);
}

#[test]
fn test_load_from_source_rejects_bad_reference() {
    let source = StubSource {
        grid: MemoryGrid::new(),
    };
    let mut reader = SheetReader::new();
    let err = reader
        .load_from_source(&source, Path::new("/no/such/sheet.xlsx"))
        .unwrap_err();

    assert!(matches!(err, Error::InvalidSourceReference { .. }));
    assert!(!reader.is_loaded());
}
