//! The crossword editor state machine.
//!
//! [`CrosswordEditor`] owns one [`CrosswordDocument`] and keeps its
//! invariant: outside of manual letter edits, the grid is exactly the union
//! rendering of the word list minus the block list, and every `cellNumbers`
//! entry is backed by a word starting at that cell with that number.
//!
//! Transient UI-mode flags live in [`EditSession`], which is deliberately
//! not part of the persisted document.

use uuid::Uuid;

use crate::error::PlacementError;
use crate::grid::derive_grid;
use crate::model::{cell_key, CellRef, CrosswordDocument, Direction, Word};
use crate::placement::validate_placement;

/// Smallest allowed grid dimension.
pub const MIN_SIZE: usize = 5;
/// Largest allowed grid dimension.
pub const MAX_SIZE: usize = 40;

/// Transient editor mode, held by [`CrosswordEditor`] beside the document.
/// Never serialized with puzzle content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditSession {
    /// A word placement is in progress (UI is collecting a start cell).
    pub placing_word: bool,
    /// Clicks remove words instead of selecting cells.
    pub delete_mode: bool,
}

/// State machine over one crossword document.
#[derive(Debug, Clone)]
pub struct CrosswordEditor {
    doc: CrosswordDocument,
    session: EditSession,
}

impl CrosswordEditor {
    /// A fresh empty puzzle. Dimensions are clamped to `[MIN_SIZE, MAX_SIZE]`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.clamp(MIN_SIZE, MAX_SIZE);
        let cols = cols.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            doc: CrosswordDocument::new(rows, cols),
            session: EditSession::default(),
        }
    }

    /// Resume editing a persisted document as-is. The session starts fresh;
    /// its flags never survive a save/load round trip.
    pub fn from_document(doc: CrosswordDocument) -> Self {
        Self {
            doc,
            session: EditSession::default(),
        }
    }

    pub fn document(&self) -> &CrosswordDocument {
        &self.doc
    }

    pub fn into_document(self) -> CrosswordDocument {
        self.doc
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn rows(&self) -> usize {
        self.doc.metadata.rows
    }

    pub fn cols(&self) -> usize {
        self.doc.metadata.cols
    }

    /// Change grid dimensions, clamped to `[MIN_SIZE, MAX_SIZE]`.
    ///
    /// The grid is rebuilt at the new size keeping every in-bounds letter
    /// (manual edits included). Words and blocks are not touched, so a word
    /// extending past the new edge becomes a ghost: it renders truncated
    /// until the grid is re-derived. `parser::validate_crossword` reports
    /// such words.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let rows = rows.clamp(MIN_SIZE, MAX_SIZE);
        let cols = cols.clamp(MIN_SIZE, MAX_SIZE);
        tracing::debug!(rows, cols, "resize");
        self.doc.metadata.rows = rows;
        self.doc.metadata.cols = cols;
        self.doc.grid = self.doc.grid.resized(rows, cols);
    }

    /// Reset words, blocks, numbers, and the grid at the current size.
    /// Confirmation is the UI's job; the model resets unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!("clear");
        self.doc = CrosswordDocument::new(self.rows(), self.cols());
    }

    /// Toggle a blocked cell.
    ///
    /// Adding a block cascade-removes every word whose path covers the cell,
    /// then re-derives the grid and garbage-collects orphaned cell numbers,
    /// all as one transition. Returns the removed words so the UI can report
    /// them.
    pub fn toggle_block(&mut self, row: usize, col: usize) -> Vec<Word> {
        if !self.doc.grid.in_bounds(row, col) {
            return Vec::new();
        }
        let cell = CellRef::new(row, col);
        if let Some(pos) = self.doc.blocks.iter().position(|b| *b == cell) {
            self.doc.blocks.remove(pos);
            tracing::debug!(row, col, "block removed");
            self.rederive();
            return Vec::new();
        }

        let (kept, removed): (Vec<Word>, Vec<Word>) = self
            .doc
            .words
            .drain(..)
            .partition(|w| !w.contains(row, col));
        self.doc.blocks.push(cell);
        self.doc.words = kept;
        tracing::debug!(row, col, removed = removed.len(), "block added");
        self.collect_numbers();
        self.rederive();
        removed
    }

    /// Place a word, running the full legality check first.
    ///
    /// On success the word gets a fresh id (returned), the start cell gets
    /// `number` unless it is already numbered, the grid is re-derived, and
    /// any in-progress placement mode on the session ends. On failure
    /// nothing changes and the reason is returned for the caller to surface.
    pub fn place_word(
        &mut self,
        text: &str,
        direction: Direction,
        number: u32,
        start: CellRef,
    ) -> Result<Uuid, PlacementError> {
        validate_placement(&self.doc.grid, &self.doc.blocks, text, direction, start)?;

        let word = Word::new(number, text, direction, start);
        let id = word.id;
        tracing::debug!(%id, number, %direction, "word placed");
        self.doc
            .cell_numbers
            .entry(cell_key(start.row, start.col))
            .or_insert(number);
        self.doc.words.push(word);
        self.session.placing_word = false;
        self.rederive();
        Ok(id)
    }

    /// Remove a word by id, re-derive, and drop its number label if no
    /// other word still uses it.
    pub fn remove_word(&mut self, id: Uuid) -> Option<Word> {
        let pos = self.doc.words.iter().position(|w| w.id == id)?;
        let removed = self.doc.words.remove(pos);
        tracing::debug!(%id, "word removed");
        self.collect_numbers();
        self.rederive();
        Some(removed)
    }

    /// Manual letter edit: write a cell directly, bypassing derivation.
    ///
    /// Allowed only on in-bounds, non-blocked cells. A manual letter on a
    /// word-covered cell can disagree with that word until the next
    /// structural transition re-derives the grid; that divergence is the
    /// documented editor behavior, isolated here on purpose.
    pub fn set_letter(&mut self, row: usize, col: usize, ch: char) -> Result<(), PlacementError> {
        if !self.doc.grid.in_bounds(row, col) {
            return Err(PlacementError::DoesNotFit);
        }
        if self.doc.is_blocked(row, col) {
            return Err(PlacementError::BlockedCell { row, col });
        }
        self.doc.grid.set(row, col, ch);
        Ok(())
    }

    /// Manual cell erase, same constraints as [`Self::set_letter`].
    pub fn clear_letter(&mut self, row: usize, col: usize) -> Result<(), PlacementError> {
        if !self.doc.grid.in_bounds(row, col) {
            return Err(PlacementError::DoesNotFit);
        }
        if self.doc.is_blocked(row, col) {
            return Err(PlacementError::BlockedCell { row, col });
        }
        self.doc.grid.clear_cell(row, col);
        Ok(())
    }

    /// All words whose path covers the given cell.
    pub fn words_at_cell(&self, row: usize, col: usize) -> Vec<&Word> {
        self.doc
            .words
            .iter()
            .filter(|w| w.contains(row, col))
            .collect()
    }

    /// The unique word of a given direction through a cell. Used by the
    /// student runtime for typing-direction inference and arrow navigation.
    pub fn word_containing(&self, direction: Direction, row: usize, col: usize) -> Option<&Word> {
        self.doc
            .words
            .iter()
            .find(|w| w.direction == direction && w.contains(row, col))
    }

    fn rederive(&mut self) {
        self.doc.grid = derive_grid(
            self.rows(),
            self.cols(),
            &self.doc.blocks,
            &self.doc.words,
        );
    }

    /// Drop every number label no longer backed by a word starting at that
    /// cell with that number.
    fn collect_numbers(&mut self) {
        let words = &self.doc.words;
        self.doc.cell_numbers.retain(|key, number| {
            crate::model::parse_cell_key(key).is_some_and(|cell| {
                words
                    .iter()
                    .any(|w| w.start == cell && w.number == *number)
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_cat() -> CrosswordEditor {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        ed
    }

    #[test]
    fn new_clamps_dimensions() {
        let ed = CrosswordEditor::new(2, 100);
        assert_eq!(ed.rows(), MIN_SIZE);
        assert_eq!(ed.cols(), MAX_SIZE);
    }

    #[test]
    fn place_word_derives_grid_and_numbers() {
        let ed = editor_with_cat();
        let doc = ed.document();
        assert_eq!(doc.grid.get(0, 0), Some("C"));
        assert_eq!(doc.grid.get(0, 2), Some("T"));
        assert_eq!(doc.cell_numbers.get("0,0"), Some(&1));
        assert_eq!(doc.words.len(), 1);
    }

    #[test]
    fn session_flags_stay_out_of_the_document() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.session_mut().placing_word = true;
        ed.session_mut().delete_mode = true;
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        // a completed placement ends placing mode; delete mode is untouched
        assert!(!ed.session().placing_word);
        assert!(ed.session().delete_mode);

        // reopening the document starts a fresh session
        let reopened = CrosswordEditor::from_document(ed.into_document());
        assert!(!reopened.session().delete_mode);
    }

    #[test]
    fn place_word_failure_leaves_state_unchanged() {
        let mut ed = editor_with_cat();
        let before = ed.document().clone();
        let err = ed
            .place_word("dog", Direction::Down, 2, CellRef::new(0, 2))
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(ed.document().words.len(), before.words.len());
        assert_eq!(ed.document().grid, before.grid);
        assert_eq!(ed.document().cell_numbers, before.cell_numbers);
    }

    #[test]
    fn start_cell_keeps_first_number() {
        let mut ed = editor_with_cat();
        // a down word starting at the same cell keeps the existing label
        ed.place_word("cast", Direction::Down, 7, CellRef::new(0, 0))
            .unwrap();
        assert_eq!(ed.document().cell_numbers.get("0,0"), Some(&1));
    }

    #[test]
    fn remove_word_collects_orphaned_numbers() {
        let mut ed = editor_with_cat();
        let id = ed.document().words[0].id;
        let removed = ed.remove_word(id).unwrap();
        assert_eq!(removed.text, "CAT");
        assert!(ed.document().cell_numbers.is_empty());
        assert_eq!(ed.document().grid.filled_cells(), 0);
    }

    #[test]
    fn remove_word_keeps_shared_start_number() {
        let mut ed = editor_with_cat();
        ed.place_word("cast", Direction::Down, 1, CellRef::new(0, 0))
            .unwrap();
        let across_id = ed.document().words[0].id;
        ed.remove_word(across_id).unwrap();
        // the down word still starts at (0,0) with number 1
        assert_eq!(ed.document().cell_numbers.get("0,0"), Some(&1));
    }

    #[test]
    fn toggle_block_cascades_word_removal() {
        let mut ed = editor_with_cat();
        ed.place_word("tin", Direction::Down, 2, CellRef::new(0, 2))
            .unwrap();
        let removed = ed.toggle_block(0, 1); // on CAT only
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].text, "CAT");
        let doc = ed.document();
        assert_eq!(doc.words.len(), 1);
        assert_eq!(doc.words[0].text, "TIN");
        // CAT's letters are gone, TIN's remain
        assert_eq!(doc.grid.get(0, 0), Some(""));
        assert_eq!(doc.grid.get(0, 2), Some("T"));
        // CAT's orphaned start number is collected, TIN's stays
        assert!(!doc.cell_numbers.contains_key("0,0"));
        assert_eq!(doc.cell_numbers.get("0,2"), Some(&2));
    }

    #[test]
    fn toggle_block_off_word_leaves_words_intact() {
        let mut ed = editor_with_cat();
        let removed = ed.toggle_block(4, 4);
        assert!(removed.is_empty());
        assert_eq!(ed.document().words.len(), 1);
        assert!(ed.document().is_blocked(4, 4));
    }

    #[test]
    fn toggle_block_twice_restores_cell() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.toggle_block(2, 2);
        assert!(ed.document().is_blocked(2, 2));
        ed.toggle_block(2, 2);
        assert!(!ed.document().is_blocked(2, 2));
    }

    #[test]
    fn place_rejected_on_blocked_cell() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.toggle_block(0, 1);
        assert_eq!(
            ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0)),
            Err(PlacementError::BlockedCell { row: 0, col: 1 })
        );
    }

    #[test]
    fn resize_preserves_letters_and_words() {
        let mut ed = editor_with_cat();
        ed.resize(8, 8);
        assert_eq!(ed.rows(), 8);
        assert_eq!(ed.document().grid.get(0, 2), Some("T"));
        assert_eq!(ed.document().words.len(), 1);
    }

    #[test]
    fn shrink_truncates_rendering_but_keeps_ghost_word() {
        let mut ed = CrosswordEditor::new(10, 10);
        ed.place_word("gorilla", Direction::Across, 1, CellRef::new(0, 2))
            .unwrap();
        ed.resize(5, 5);
        // word survives; only the in-bounds letters render
        assert_eq!(ed.document().words.len(), 1);
        assert_eq!(ed.document().grid.get(0, 4), Some("R"));
        assert_eq!(ed.document().grid.get(0, 5), None);
    }

    #[test]
    fn clear_resets_everything_at_current_size() {
        let mut ed = editor_with_cat();
        ed.toggle_block(4, 4);
        ed.clear();
        let doc = ed.document();
        assert!(doc.words.is_empty());
        assert!(doc.blocks.is_empty());
        assert!(doc.cell_numbers.is_empty());
        assert_eq!(doc.grid.filled_cells(), 0);
        assert_eq!(doc.metadata.rows, 5);
    }

    #[test]
    fn manual_letter_edit_bypasses_derivation() {
        let mut ed = editor_with_cat();
        ed.set_letter(0, 0, 'x').unwrap();
        assert_eq!(ed.document().grid.get(0, 0), Some("X"));
        // the next structural transition re-derives and overwrites it
        ed.place_word("tin", Direction::Down, 2, CellRef::new(0, 2))
            .unwrap();
        assert_eq!(ed.document().grid.get(0, 0), Some("C"));
    }

    #[test]
    fn manual_letter_edit_rejected_on_blocked_cell() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.toggle_block(1, 1);
        assert_eq!(
            ed.set_letter(1, 1, 'a'),
            Err(PlacementError::BlockedCell { row: 1, col: 1 })
        );
        assert_eq!(ed.set_letter(9, 9, 'a'), Err(PlacementError::DoesNotFit));
    }

    #[test]
    fn word_lookups() {
        let mut ed = editor_with_cat();
        ed.place_word("tin", Direction::Down, 2, CellRef::new(0, 2))
            .unwrap();
        assert_eq!(ed.words_at_cell(0, 2).len(), 2);
        assert_eq!(ed.words_at_cell(1, 2).len(), 1);
        assert!(ed.words_at_cell(4, 4).is_empty());
        assert_eq!(
            ed.word_containing(Direction::Across, 0, 1).unwrap().text,
            "CAT"
        );
        assert_eq!(
            ed.word_containing(Direction::Down, 2, 2).unwrap().text,
            "TIN"
        );
        assert!(ed.word_containing(Direction::Down, 0, 1).is_none());
    }

    #[test]
    fn duplicate_number_across_directions_is_allowed() {
        let mut ed = editor_with_cat();
        // the model does not police (number, direction) collisions
        assert!(ed
            .place_word("tin", Direction::Down, 1, CellRef::new(0, 2))
            .is_ok());
    }
}
