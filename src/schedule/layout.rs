//! Column layouts of the two source document variants.
//!
//! The offsets are a contract with the federation's published formats and
//! are injected into the normalizer rather than hard-coded there, because
//! archived seasons have shipped with different shapes.

/// Which source format a row came from, with the variant-specific checks
/// the normalizer must apply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SourceVariant {
    /// Fixed-width page rows.  Rows of any other width come from archived
    /// tables with a shorter shape and must be dropped, not misaligned.
    Html { expected_columns: usize },
    /// Workbook rows.  Rows lacking either date cell are dropped.
    Sheet,
}

/// Cell offsets for one source variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RowLayout {
    pub variant: SourceVariant,
    pub serial_number: usize,
    pub match_number: usize,
    pub month: usize,
    pub day: usize,
    pub category: usize,
    pub studium: usize,
    pub kickoff: usize,
    pub home_team: usize,
    pub away_team: usize,
}

pub const HTML_LAYOUT: RowLayout = RowLayout {
    variant: SourceVariant::Html {
        expected_columns: 13,
    },
    serial_number: 0,
    match_number: 1,
    month: 3,
    day: 4,
    category: 5,
    studium: 7,
    kickoff: 8,
    home_team: 9,
    away_team: 11,
};

pub const SHEET_LAYOUT: RowLayout = RowLayout {
    variant: SourceVariant::Sheet,
    serial_number: 0,
    match_number: 1,
    month: 3,
    day: 4,
    category: 5,
    studium: 7,
    kickoff: 8,
    home_team: 9,
    away_team: 11,
};

/// The heading row the federation repeats above each table section,
/// compared cell by cell.  A fixed literal, not a heuristic: the format is
/// externally controlled and stable.
pub const HEADER_ROW: [&str; 12] = [
    "", "M.No.", "節", "月", "日", "C", "G", "会場", "KO", "HOME", "", "AWAY",
];
