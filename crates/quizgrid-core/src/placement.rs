//! Placement legality checks.
//!
//! This is the single gate that keeps the grid consistent: every word that
//! makes it past [`validate_placement`] is letter-compatible with everything
//! already on the grid, so derivation never has conflicts to resolve.

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::model::{CellRef, Direction};

/// Check whether placing `text` at `start` in `direction` is legal against
/// the current grid and block list.
///
/// Checks run in order: bounds, blocked cells, letter conflicts. The first
/// failure wins. Letter comparison is uppercase-vs-uppercase by
/// construction, so it is case-insensitive from the caller's point of view.
pub fn validate_placement(
    grid: &Grid,
    blocks: &[CellRef],
    text: &str,
    direction: Direction,
    start: CellRef,
) -> Result<(), PlacementError> {
    let letters: Vec<char> = text.to_uppercase().chars().collect();
    if letters.is_empty() {
        return Err(PlacementError::DoesNotFit);
    }

    // (a) the end cell must lie within bounds
    let (end_row, end_col) = match direction {
        Direction::Across => (start.row, start.col + letters.len() - 1),
        Direction::Down => (start.row + letters.len() - 1, start.col),
    };
    if !grid.in_bounds(start.row, start.col) || !grid.in_bounds(end_row, end_col) {
        return Err(PlacementError::DoesNotFit);
    }

    // (b) no blocked cell along the path
    for i in 0..letters.len() {
        let (row, col) = match direction {
            Direction::Across => (start.row, start.col + i),
            Direction::Down => (start.row + i, start.col),
        };
        if blocks.contains(&CellRef::new(row, col)) {
            return Err(PlacementError::BlockedCell { row, col });
        }
    }

    // (c) every already-occupied cell must agree with the word's letter
    for (i, &new) in letters.iter().enumerate() {
        let (row, col) = match direction {
            Direction::Across => (start.row, start.col + i),
            Direction::Down => (start.row + i, start.col),
        };
        if let Some(existing) = grid.letter(row, col) {
            if existing != new {
                return Err(PlacementError::LetterConflict {
                    row,
                    col,
                    existing,
                    new,
                });
            }
        }
    }

    Ok(())
}
