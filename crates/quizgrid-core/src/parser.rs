//! JSON document loading and authoring-side validation.
//!
//! Loads assignment and crossword documents from files, and checks them for
//! the issues the editor itself does not police (duplicate clue labels,
//! ghost words after a shrink, authored answer lists that can never match).
//! Warnings are advisory: a document with warnings still loads and scores.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{
    parse_cell_key, Assignment, AssignmentContent, CrosswordDocument, Question,
};
use crate::placement::validate_placement;

/// Parse an assignment document. Accepts either a bare `content` payload
/// (`{"questions": [...]}`) or a full assignment (`{"title", "content"}`).
pub fn parse_assignment_str(content: &str) -> Result<AssignmentContent> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("failed to parse assignment JSON")?;
    if value.get("content").is_some() {
        let assignment: Assignment =
            serde_json::from_value(value).context("failed to parse assignment document")?;
        Ok(assignment.content)
    } else {
        serde_json::from_value(value).context("failed to parse assignment content")
    }
}

/// Load an assignment document from a file.
pub fn load_assignment(path: &Path) -> Result<AssignmentContent> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read assignment file: {}", path.display()))?;
    parse_assignment_str(&content)
        .with_context(|| format!("in {}", path.display()))
}

/// Parse a standalone crossword document.
pub fn parse_crossword_str(content: &str) -> Result<CrosswordDocument> {
    serde_json::from_str(content).context("failed to parse crossword JSON")
}

/// Load a crossword document from a file.
pub fn load_crossword(path: &Path) -> Result<CrosswordDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read crossword file: {}", path.display()))?;
    parse_crossword_str(&content)
        .with_context(|| format!("in {}", path.display()))
}

/// Recursively load all `.json` assignment files from a directory,
/// skipping files that fail to parse.
pub fn load_assignment_directory(dir: &Path) -> Result<Vec<AssignmentContent>> {
    let mut out = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            out.extend(load_assignment_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_assignment(&path) {
                Ok(content) => out.push(content),
                Err(e) => {
                    tracing::warn!("skipping {}: {e:#}", path.display());
                }
            }
        }
    }

    Ok(out)
}

/// A warning from document validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Where the problem sits ("question 3", "word 2 across"), if known.
    pub location: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn at(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            message: message.into(),
        }
    }
}

/// Validate an assignment's questions for common authoring mistakes.
pub fn validate_assignment(content: &AssignmentContent) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if content.questions.is_empty() {
        warnings.push(ValidationWarning {
            location: None,
            message: "assignment has no questions".into(),
        });
    }

    for (i, question) in content.questions.iter().enumerate() {
        let loc = format!("question {}", i + 1);
        match question {
            Question::Test {
                q,
                options,
                correct,
                ..
            } => {
                if q.trim().is_empty() {
                    warnings.push(ValidationWarning::at(&loc, "question text is empty"));
                }
                if options.len() < 2 {
                    warnings.push(ValidationWarning::at(&loc, "fewer than two options"));
                }
                if *correct >= options.len() {
                    warnings.push(ValidationWarning::at(
                        &loc,
                        format!("correct index {correct} is out of range"),
                    ));
                }
            }
            Question::Fill { q, answers, .. } => {
                if q.trim().is_empty() {
                    warnings.push(ValidationWarning::at(&loc, "question text is empty"));
                }
                if answers.is_empty() {
                    warnings.push(ValidationWarning::at(&loc, "no blanks defined"));
                }
                for (b, variants) in answers.iter().enumerate() {
                    if variants.iter().all(|v| v.trim().is_empty()) {
                        warnings.push(ValidationWarning::at(
                            &loc,
                            format!("blank {} has no non-empty accepted variant", b + 1),
                        ));
                    }
                }
            }
            Question::Sentence {
                sentence, answers, ..
            } => {
                let blanks = sentence.matches(crate::scoring::BLANK_MARKER).count();
                if blanks == 0 {
                    warnings.push(ValidationWarning::at(
                        &loc,
                        "sentence contains no ___ blanks",
                    ));
                }
                if answers.len() != blanks {
                    warnings.push(ValidationWarning::at(
                        &loc,
                        format!(
                            "{} answer list(s) for {} blank(s)",
                            answers.len(),
                            blanks
                        ),
                    ));
                }
            }
            Question::Crossword { puzzle, .. } => {
                for w in validate_crossword(puzzle) {
                    let nested = match w.location {
                        Some(inner) => format!("{loc}, {inner}"),
                        None => loc.clone(),
                    };
                    warnings.push(ValidationWarning::at(nested, w.message));
                }
            }
            Question::Unknown => {
                warnings.push(ValidationWarning::at(&loc, "unrecognized question type"));
            }
        }
    }

    warnings
}

/// Validate a crossword document's internal consistency.
pub fn validate_crossword(doc: &CrosswordDocument) -> Vec<ValidationWarning> {
    use crate::editor::{MAX_SIZE, MIN_SIZE};

    let mut warnings = Vec::new();
    let rows = doc.metadata.rows;
    let cols = doc.metadata.cols;

    if !(MIN_SIZE..=MAX_SIZE).contains(&rows) || !(MIN_SIZE..=MAX_SIZE).contains(&cols) {
        warnings.push(ValidationWarning {
            location: None,
            message: format!(
                "dimensions {rows}x{cols} outside the {MIN_SIZE}..{MAX_SIZE} range"
            ),
        });
    }

    // duplicate (number, direction) pairs confuse clue lists
    for (i, a) in doc.words.iter().enumerate() {
        if doc.words[..i]
            .iter()
            .any(|b| b.number == a.number && b.direction == a.direction)
        {
            warnings.push(ValidationWarning::at(
                format!("word {} {}", a.number, a.direction),
                "duplicate number and direction",
            ));
        }
    }

    for word in &doc.words {
        let loc = format!("word {} {}", word.number, word.direction);
        if word.length != word.text.chars().count() {
            warnings.push(ValidationWarning::at(&loc, "length does not match text"));
        }
        if word
            .cells()
            .any(|c| c.row >= rows || c.col >= cols)
        {
            // ghost word left behind by a shrink
            warnings.push(ValidationWarning::at(&loc, "extends outside the grid"));
        }
        if word
            .cells()
            .any(|c| doc.is_blocked(c.row, c.col))
        {
            warnings.push(ValidationWarning::at(&loc, "crosses a blocked cell"));
        }
    }

    // overlapping words must agree on shared cells; check each against a
    // grid derived from the words before it
    for (i, word) in doc.words.iter().enumerate() {
        let grid = crate::grid::derive_grid(rows, cols, &doc.blocks, &doc.words[..i]);
        if let Err(e) = validate_placement(&grid, &doc.blocks, &word.text, word.direction, word.start)
        {
            if e.is_conflict() {
                warnings.push(ValidationWarning::at(
                    format!("word {} {}", word.number, word.direction),
                    e.to_string(),
                ));
            }
        }
    }

    for (key, number) in &doc.cell_numbers {
        let backed = parse_cell_key(key).is_some_and(|cell| {
            doc.words
                .iter()
                .any(|w| w.start == cell && w.number == *number)
        });
        if !backed {
            warnings.push(ValidationWarning::at(
                format!("cell {key}"),
                format!("number label {number} has no word starting here"),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::CrosswordEditor;
    use crate::model::{cell_key, CellRef, Direction};

    const VALID_ASSIGNMENT: &str = r#"{
        "title": "Unit 3 review",
        "content": {
            "questions": [
                {"type": "test", "q": "Pick one", "options": ["A", "B"], "correct": 1},
                {"type": "fill", "q": "Name the animal", "answers": [["cat", "kitty"]]},
                {"type": "sentence", "sentence": "I ___ to school.", "answers": [["go", "walk"]]}
            ]
        }
    }"#;

    #[test]
    fn parse_full_assignment() {
        let content = parse_assignment_str(VALID_ASSIGNMENT).unwrap();
        assert_eq!(content.questions.len(), 3);
        assert!(validate_assignment(&content).is_empty());
    }

    #[test]
    fn parse_bare_content_payload() {
        let content =
            parse_assignment_str(r#"{"questions": [{"type": "test", "q": "x", "options": ["A", "B"], "correct": 0}]}"#)
                .unwrap();
        assert_eq!(content.questions.len(), 1);
    }

    #[test]
    fn parse_malformed_json_fails() {
        assert!(parse_assignment_str("not json {").is_err());
    }

    #[test]
    fn validate_flags_out_of_range_correct_index() {
        let content = parse_assignment_str(
            r#"{"questions": [{"type": "test", "q": "x", "options": ["A", "B"], "correct": 5}]}"#,
        )
        .unwrap();
        let warnings = validate_assignment(&content);
        assert!(warnings.iter().any(|w| w.message.contains("out of range")));
    }

    #[test]
    fn validate_flags_blank_count_mismatch() {
        let content = parse_assignment_str(
            r#"{"questions": [{"type": "sentence", "sentence": "I ___ to school ___ day.", "answers": [["go"]]}]}"#,
        )
        .unwrap();
        let warnings = validate_assignment(&content);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("1 answer list(s) for 2 blank(s)")));
    }

    #[test]
    fn validate_flags_unknown_type() {
        let content =
            parse_assignment_str(r#"{"questions": [{"type": "matching", "pairs": []}]}"#).unwrap();
        let warnings = validate_assignment(&content);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("unrecognized question type")));
    }

    #[test]
    fn validate_crossword_clean_document() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        ed.place_word("tin", Direction::Down, 2, CellRef::new(0, 2))
            .unwrap();
        assert!(validate_crossword(ed.document()).is_empty());
    }

    #[test]
    fn validate_crossword_flags_ghost_words() {
        let mut ed = CrosswordEditor::new(10, 10);
        ed.place_word("gorilla", Direction::Across, 1, CellRef::new(0, 5))
            .unwrap();
        ed.resize(5, 5);
        let warnings = validate_crossword(ed.document());
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("extends outside the grid")));
    }

    #[test]
    fn validate_crossword_flags_duplicate_number_direction() {
        let mut ed = CrosswordEditor::new(7, 7);
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        ed.place_word("dog", Direction::Across, 1, CellRef::new(2, 0))
            .unwrap();
        let warnings = validate_crossword(ed.document());
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("duplicate number and direction")));
    }

    #[test]
    fn validate_crossword_flags_orphaned_numbers() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        let mut doc = ed.into_document();
        doc.cell_numbers.insert(cell_key(3, 3), 9);
        let warnings = validate_crossword(&doc);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no word starting here")));
    }

    #[test]
    fn validate_crossword_flags_letter_conflict() {
        // hand-built document with disagreeing overlap, as a buggy client
        // could persist it
        let mut doc = CrosswordDocument::new(5, 5);
        doc.words.push(crate::model::Word::new(
            1,
            "cat",
            Direction::Across,
            CellRef::new(0, 0),
        ));
        doc.words.push(crate::model::Word::new(
            2,
            "dog",
            Direction::Down,
            CellRef::new(0, 2),
        ));
        let warnings = validate_crossword(&doc);
        assert!(warnings.iter().any(|w| w.message.contains("letter conflict")));
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.json"), VALID_ASSIGNMENT).unwrap();
        std::fs::write(dir.path().join("bad.json"), "not json").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "not json").unwrap();

        let loaded = load_assignment_directory(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].questions.len(), 3);
    }

    #[test]
    fn crossword_roundtrip_through_parser() {
        let mut ed = CrosswordEditor::new(5, 5);
        ed.place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
            .unwrap();
        let json = serde_json::to_string(ed.document()).unwrap();
        let doc = parse_crossword_str(&json).unwrap();
        assert_eq!(doc.words.len(), 1);
        assert_eq!(doc.grid.get(0, 0), Some("C"));
        assert_eq!(doc.cell_numbers.get("0,0"), Some(&1));
    }
}
