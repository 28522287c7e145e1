//! Formatting utilities for terminal output

use crate::core::{Board, Cell, Position};
use crate::search::WordPath;

/// Column indices above the grid, aligned with [`board_rows`]
#[must_use]
pub fn column_header(size: usize) -> String {
    let cols: Vec<String> = (0..size).map(|c| format!("{:>2}", c % 100)).collect();
    format!("   {}", cols.join(""))
}

/// One line per board row, prefixed by the row index
///
/// `mark` decorates every cell; pass the identity to get plain text.
pub fn board_rows<F>(board: &Board, mut mark: F) -> Vec<String>
where
    F: FnMut(Position, Cell) -> String,
{
    board
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let cells: String = row
                .iter()
                .enumerate()
                .map(|(c, &cell)| {
                    let pos = Position::new(r as i32, c as i32);
                    format!(" {}", mark(pos, cell))
                })
                .collect();
            format!("{r:>2} {cells}")
        })
        .collect()
}

/// A word and the cells it runs through
#[must_use]
pub fn format_path(path: &WordPath) -> String {
    let steps: Vec<String> = path.positions().iter().map(ToString::to_string).collect();
    format!("{path} via {}", steps.join(" → "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score as a bar relative to the top score
#[must_use]
pub fn score_bar(score: usize, top: usize, width: usize) -> String {
    create_progress_bar(score as f64, top as f64, width)
}
