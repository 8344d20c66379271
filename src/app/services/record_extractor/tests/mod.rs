//! Test fixtures shared across the record extractor test modules

mod extractor_tests;

use crate::app::adapters::grid::MemoryGrid;
use crate::config::{ExtractOptions, TranslationTable};

/// Translation for the sample product sheet, keyed canonically
pub fn product_translation() -> TranslationTable {
    TranslationTable::new([
        ("product_name", "name"),
        ("unit_price", "price"),
        ("in_stock", "stock"),
    ])
    .unwrap()
}

/// Canonical-matching options over the product translation
pub fn product_options() -> ExtractOptions {
    let mut options = ExtractOptions::new(product_translation());
    options.canonize = true;
    options
}

/// A small product sheet: headers in row 1 with display formatting, an
/// interleaved column the translation does not know, three data rows.
pub fn product_grid() -> MemoryGrid {
    let mut grid = MemoryGrid::new();
    grid.set_cell(1, 1, "Product Name");
    grid.set_cell(1, 2, "Internal Ref");
    grid.set_cell(1, 3, "Unit Price");
    grid.set_cell(1, 4, "In Stock");

    grid.set_cell(2, 1, "Widget");
    grid.set_cell(2, 2, "W-001");
    grid.set_cell(2, 3, 9.99);
    grid.set_cell(2, 4, true);

    grid.set_cell(3, 1, "Gadget");
    grid.set_cell(3, 2, "G-204");
    grid.set_cell(3, 3, 24.5);
    grid.set_cell(3, 4, false);

    grid.set_cell(4, 1, "Sprocket");
    grid.set_cell(4, 2, "S-114");
    grid.set_cell(4, 3, 3.0);
    grid.set_cell(4, 4, true);

    grid
}
