//! Carousel Layout
//!
//! Turns the raw title list into sorted, column-major chunks.

use super::collation::sort_tr;

/// Split list text into titles: one per line, trimmed, blanks dropped,
/// sorted in Turkish collation order
///
/// Duplicates are kept.
pub fn parse_titles(text: &str) -> Vec<String> {
    let mut titles: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    sort_tr(&mut titles);
    titles
}

/// Fill columns top to bottom: item `i` lands in column `i / per_column`,
/// row `i % per_column`
pub fn layout_columns(titles: &[String], per_column: usize) -> Vec<&[String]> {
    titles.chunks(per_column.max(1)).collect()
}
