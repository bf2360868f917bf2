//! Core document types for quizgrid.
//!
//! These are the wire-contract types exchanged with the authoring UI, the
//! student runtime, and the persistence layer. Field names are part of the
//! JSON interop contract and must not change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::grid::Grid;

/// Reading direction of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "across" => Ok(Direction::Across),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// A cell coordinate. Serves both as a word's start cell and as a
/// blocked-cell entry (`blocks` is a list of these on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A word placed on the grid. Immutable once placed except by removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier, assigned at placement time.
    pub id: Uuid,
    /// Clue number label shown at the start cell.
    pub number: u32,
    /// Uppercased letters.
    pub text: String,
    pub direction: Direction,
    pub start: CellRef,
    /// Always equals the character count of `text`.
    pub length: usize,
}

impl Word {
    /// Create a word with a fresh id; `text` is uppercased and `length`
    /// derived from it.
    pub fn new(number: u32, text: &str, direction: Direction, start: CellRef) -> Self {
        let text = text.to_uppercase();
        let length = text.chars().count();
        Self {
            id: Uuid::new_v4(),
            number,
            text,
            direction,
            start,
            length,
        }
    }

    /// The cell path this word covers, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        let CellRef { row, col } = self.start;
        let direction = self.direction;
        (0..self.length).map(move |i| match direction {
            Direction::Across => CellRef::new(row, col + i),
            Direction::Down => CellRef::new(row + i, col),
        })
    }

    /// Whether this word's path covers the given cell.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|c| c.row == row && c.col == col)
    }

    /// The letter this word implies at the given cell, if covered.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        let offset = match self.direction {
            Direction::Across => {
                if row != self.start.row || col < self.start.col {
                    return None;
                }
                col - self.start.col
            }
            Direction::Down => {
                if col != self.start.col || row < self.start.row {
                    return None;
                }
                row - self.start.row
            }
        };
        if offset >= self.length {
            return None;
        }
        self.text.chars().nth(offset)
    }
}

/// Map from `"row,col"` keys to clue number labels.
pub type CellNumbers = BTreeMap<String, u32>;

/// Build the `cellNumbers` key for a cell.
pub fn cell_key(row: usize, col: usize) -> String {
    format!("{row},{col}")
}

/// Parse a `cellNumbers` key back into a cell reference.
pub fn parse_cell_key(key: &str) -> Option<CellRef> {
    let (row, col) = key.split_once(',')?;
    Some(CellRef::new(
        row.trim().parse().ok()?,
        col.trim().parse().ok()?,
    ))
}

/// Persisted puzzle metadata: dimensions only. Transient editor-mode flags
/// live in `editor::EditSession`, never in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMetadata {
    pub rows: usize,
    pub cols: usize,
}

impl Default for PuzzleMetadata {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// A complete crossword document as persisted and delivered to the student
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrosswordDocument {
    #[serde(default)]
    pub metadata: PuzzleMetadata,
    #[serde(default)]
    pub blocks: Vec<CellRef>,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(rename = "cellNumbers", default)]
    pub cell_numbers: CellNumbers,
    #[serde(default)]
    pub grid: Grid,
}

impl CrosswordDocument {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            metadata: PuzzleMetadata { rows, cols },
            blocks: Vec::new(),
            words: Vec::new(),
            cell_numbers: CellNumbers::new(),
            grid: Grid::new(rows, cols),
        }
    }

    /// Whether the given cell is blocked.
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.blocks.iter().any(|b| b.row == row && b.col == col)
    }
}

/// An authored question. The `type` tag on the wire selects the variant;
/// unrecognized tags deserialize to `Unknown` so one bad question never
/// fails a whole assignment document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Test {
        q: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        options: Vec<String>,
        /// Index into `options`.
        correct: usize,
    },
    Fill {
        q: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        /// One list of accepted variants per blank.
        answers: Vec<Vec<String>>,
    },
    Sentence {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        q: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        /// Contains `"___"` markers, one per blank.
        sentence: String,
        answers: Vec<Vec<String>>,
    },
    Crossword {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        #[serde(flatten)]
        puzzle: CrosswordDocument,
    },
    #[serde(other)]
    Unknown,
}

impl Question {
    pub fn type_name(&self) -> &'static str {
        match self {
            Question::Test { .. } => "test",
            Question::Fill { .. } => "fill",
            Question::Sentence { .. } => "sentence",
            Question::Crossword { .. } => "crossword",
            Question::Unknown => "unknown",
        }
    }

    /// The text shown to the student, when the type carries one.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Question::Test { q, .. } | Question::Fill { q, .. } => Some(q),
            Question::Sentence { q, sentence, .. } => Some(q.as_deref().unwrap_or(sentence)),
            Question::Crossword { .. } | Question::Unknown => None,
        }
    }
}

/// The `content` payload of an assignment document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssignmentContent {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// An assignment as stored by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Assignment {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: AssignmentContent,
}

/// A student answer for one question. The shape depends on the question
/// type, so this is an untagged union over the three runtime shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Selected option index (test questions).
    Choice(usize),
    /// One raw entry per blank (fill/sentence questions).
    Blanks(Vec<String>),
    /// Entered letter grid (crossword questions).
    Grid(Vec<Vec<String>>),
}
