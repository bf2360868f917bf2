//! The letter grid and its derivation from placed words.
//!
//! The grid is a projection: outside of manual letter edits it is always
//! recomputable from the word list and block list via [`derive_grid`].

use serde::{Deserialize, Serialize};

use crate::model::{CellRef, Word};

/// A `rows x cols` matrix of cells. Each cell is either the empty string or
/// a single uppercase character; the row-of-strings shape is the wire
/// contract with the UI layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<String>>);

impl Grid {
    /// An all-empty grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self(vec![vec![String::new(); cols]; rows])
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map(Vec::len).unwrap_or(0)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Cell contents, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.0.get(row)?.get(col).map(String::as_str)
    }

    /// The letter in a cell, if the cell holds one.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col)?.chars().next()
    }

    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none_or(str::is_empty)
    }

    /// Write an uppercased letter. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.0.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch.to_uppercase().collect();
        }
    }

    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.0.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.clear();
        }
    }

    /// Count of non-empty cells.
    pub fn filled_cells(&self) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// A copy at new dimensions, keeping every in-bounds letter. Used by
    /// resize, which must not lose manually typed letters.
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        let mut next = Grid::new(rows, cols);
        for (r, row) in self.0.iter().enumerate().take(rows) {
            for (c, cell) in row.iter().enumerate().take(cols) {
                next.0[r][c] = cell.clone();
            }
        }
        next
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.0.iter().map(Vec::as_slice)
    }
}

/// Reconstruct the full letter grid from placed words and blocked cells.
///
/// Starts from an all-empty matrix and writes each word's letters along its
/// path, skipping blocked cells and silently skipping out-of-bounds cells
/// (ghost words left behind by a shrink render truncated). Overlapping words
/// are assumed letter-compatible: conflicts were rejected at placement time,
/// so no resolution happens here.
pub fn derive_grid(rows: usize, cols: usize, blocks: &[CellRef], words: &[Word]) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for word in words {
        for (i, cell) in word.cells().enumerate() {
            if !grid.in_bounds(cell.row, cell.col) {
                continue;
            }
            if blocks.contains(&cell) {
                continue;
            }
            if let Some(ch) = word.text.chars().nth(i) {
                grid.set(cell.row, cell.col, ch);
            }
        }
    }
    grid
}
