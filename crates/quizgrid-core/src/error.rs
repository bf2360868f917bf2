//! Typed rejection values for grid editing.
//!
//! Placement failures are ordinary values the caller surfaces to the end
//! user; nothing in this crate treats them as fatal.

use thiserror::Error;

/// Why a candidate word placement (or manual letter edit) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The word's end cell falls outside the grid.
    #[error("does not fit")]
    DoesNotFit,

    /// The word's path crosses a blocked cell.
    #[error("blocked cell in path at [{row},{col}]")]
    BlockedCell { row: usize, col: usize },

    /// A cell along the path already holds a different letter.
    #[error("letter conflict at [{row},{col}]: '{existing}' vs '{new}'")]
    LetterConflict {
        row: usize,
        col: usize,
        existing: char,
        new: char,
    },
}

impl PlacementError {
    /// Returns `true` when the rejection involves another word's letters,
    /// as opposed to geometry (bounds/blocks). The authoring UI highlights
    /// the conflicting cell for these.
    pub fn is_conflict(&self) -> bool {
        matches!(self, PlacementError::LetterConflict { .. })
    }

    /// The cell to highlight for this rejection, if there is one.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match self {
            PlacementError::DoesNotFit => None,
            PlacementError::BlockedCell { row, col }
            | PlacementError::LetterConflict { row, col, .. } => Some((*row, *col)),
        }
    }
}
