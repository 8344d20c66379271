//! Application constants for the sheet extractor
//!
//! This module contains the canonicalization lookup tables, default row
//! offsets, and source validation constants used throughout the library.

// =============================================================================
// Header Canonicalization
// =============================================================================

/// Accented characters recognized by the header canonicalizer.
///
/// Paired one-to-one with [`CANONICAL_CHARS`]; both tables must stay the same
/// length and in the same order.
pub const ACCENTED_CHARS: [char; 24] = [
    'á', 'é', 'í', 'ó', 'ú', 'à', 'è', 'ì', 'ò', 'ù', 'ä', 'ë', 'ï', 'ö', 'ü', 'ÿ', 'â', 'ê', 'î',
    'ô', 'û', 'ã', 'õ', 'ç',
];

/// Unaccented equivalents for [`ACCENTED_CHARS`], index for index.
pub const CANONICAL_CHARS: [char; 24] = [
    'a', 'e', 'i', 'o', 'u', 'a', 'e', 'i', 'o', 'u', 'a', 'e', 'i', 'o', 'u', 'y', 'a', 'e', 'i',
    'o', 'u', 'a', 'o', 'c',
];

/// Pattern matching runs of characters collapsed to a single underscore
/// during canonicalization: whitespace, dots, and parentheses.
pub const SEPARATOR_PATTERN: &str = r"[\s.()]+";

// =============================================================================
// Grid Layout Defaults
// =============================================================================

/// Row holding the column display names (1-based)
pub const DEFAULT_HEADER_ROW: u32 = 1;

/// First row holding data records (1-based)
pub const DEFAULT_FIRST_DATA_ROW: u32 = 2;

// =============================================================================
// Source Validation
// =============================================================================

/// File extensions accepted by source validation, matching the spreadsheet
/// MIME types the grid-parsing collaborator is expected to handle
/// (application/vnd.ms-excel and
/// application/vnd.openxmlformats-officedocument.spreadsheetml.sheet).
pub const VALID_SOURCE_EXTENSIONS: &[&str] = &["xls", "xlsx"];
