//! Pipe table reassembly.
//!
//! The classifier buffers consecutive `|...|` lines and hands the whole run
//! over once it ends. Row 0 is the header, row 1 is the separator (dropped
//! unchecked), the remaining rows form the body.

use crate::inline::format_inline;
use crate::Block;

/// Minimum number of buffered rows for a table: header and separator.
pub const MIN_TABLE_ROWS: usize = 2;

/// Split a raw row into inline-formatted cells.
///
/// Cells are trimmed of ASCII whitespace and empty ones are dropped, which also removes the
/// artifacts of the leading and trailing pipes.
pub fn split_row(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim_ascii)
        .filter(|cell| !cell.is_empty())
        .map(format_inline)
        .collect()
}

/// Build a [`Block::Table`] from buffered rows.
///
/// Returns `None` when fewer than [`MIN_TABLE_ROWS`] rows were buffered.
/// Body rows without cells are skipped; column counts are not checked.
pub fn reassemble(rows: &[String]) -> Option<Block> {
    if rows.len() < MIN_TABLE_ROWS {
        return None;
    }

    let header = split_row(&rows[0]);
    let body = rows[MIN_TABLE_ROWS..]
        .iter()
        .map(|row| split_row(row))
        .filter(|cells| !cells.is_empty())
        .collect();

    Some(Block::Table { header, rows: body })
}
