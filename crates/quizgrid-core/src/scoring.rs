//! Per-question evaluation and aggregate scoring.
//!
//! The engine is total over malformed input: a missing, short, or
//! wrong-shaped answer degrades the question to skipped, and an unknown
//! question type gets a skipped-with-note review entry. Scoring is always
//! completable; nothing here errors.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{Answer, CellRef, CrosswordDocument, Question};
use crate::normalize::matches_any;
use crate::review::{BlankReview, ReviewDetail, ReviewItem, ScoreReport, ScoreStats, WordReview};

/// The blank marker inside a sentence question's text.
pub const BLANK_MARKER: &str = "___";

/// Score an answer set against a question list.
///
/// `answers` is parallel to `questions`; entries past its end count as
/// unanswered.
pub fn score(questions: &[Question], answers: &[Option<Answer>]) -> ScoreReport {
    let review: Vec<ReviewItem> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| evaluate(i, q, answers.get(i).and_then(Option::as_ref)))
        .collect();
    let stats = aggregate(&review);
    ScoreReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        stats,
        review,
    }
}

/// Decode a raw answers JSON array into the parallel answer list.
/// Ill-shaped entries (and a non-array document) degrade to unanswered.
pub fn parse_answers(value: &serde_json::Value) -> Vec<Option<Answer>> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
        _ => {
            tracing::warn!("answers document is not an array, treating all questions as unanswered");
            Vec::new()
        }
    }
}

/// Pre-submission gate: the index of the first required question without a
/// complete answer, or `None` when submission may proceed.
///
/// Crossword and unknown questions never block submission; crosswords are
/// compared on their own path.
pub fn validate_all_answered(questions: &[Question], answers: &[Option<Answer>]) -> Option<usize> {
    questions.iter().enumerate().find_map(|(i, q)| {
        let answer = answers.get(i).and_then(Option::as_ref);
        let answered = match q {
            Question::Test { .. } => matches!(answer, Some(Answer::Choice(_))),
            Question::Fill { answers: expected, .. } => all_blanks_filled(expected.len(), answer),
            Question::Sentence { sentence, .. } => {
                all_blanks_filled(sentence.matches(BLANK_MARKER).count(), answer)
            }
            Question::Crossword { .. } | Question::Unknown => true,
        };
        (!answered).then_some(i)
    })
}

fn all_blanks_filled(blanks: usize, answer: Option<&Answer>) -> bool {
    if blanks == 0 {
        return true;
    }
    match answer {
        Some(Answer::Blanks(given)) => {
            (0..blanks).all(|i| given.get(i).is_some_and(|raw| !raw.trim().is_empty()))
        }
        _ => false,
    }
}

fn evaluate(index: usize, question: &Question, answer: Option<&Answer>) -> ReviewItem {
    match question {
        Question::Test {
            q,
            options,
            correct,
            ..
        } => evaluate_test(index, q, options, *correct, answer),
        Question::Fill { q, answers, .. } => {
            let expected: Vec<Vec<String>> = answers.clone();
            evaluate_blanks(index, q.clone(), expected, answer)
        }
        Question::Sentence {
            q,
            sentence,
            answers,
            ..
        } => {
            // blank count is defined by the sentence text; authored variant
            // lists beyond it are ignored, missing ones can never match
            let blanks = sentence.matches(BLANK_MARKER).count();
            let expected: Vec<Vec<String>> = (0..blanks)
                .map(|i| answers.get(i).cloned().unwrap_or_default())
                .collect();
            let prompt = q.clone().unwrap_or_else(|| sentence.clone());
            evaluate_blanks(index, prompt, expected, answer)
        }
        Question::Crossword { puzzle, .. } => evaluate_crossword(index, puzzle, answer),
        Question::Unknown => skipped_with_note(index, "unknown question type, not scored"),
    }
}

fn skipped_with_note(index: usize, message: &str) -> ReviewItem {
    ReviewItem {
        question_index: index,
        question: String::new(),
        is_correct: false,
        is_skipped: true,
        points_earned: 0,
        points_total: 1,
        detail: ReviewDetail::Note {
            message: message.to_string(),
        },
    }
}

fn evaluate_test(
    index: usize,
    prompt: &str,
    options: &[String],
    correct: usize,
    answer: Option<&Answer>,
) -> ReviewItem {
    let expected = options.get(correct).cloned().unwrap_or_default();
    let choice = match answer {
        Some(Answer::Choice(c)) => Some(*c),
        _ => None,
    };
    // unanswered is skipped, never incorrect
    let is_skipped = choice.is_none();
    let is_correct = choice == Some(correct);
    ReviewItem {
        question_index: index,
        question: prompt.to_string(),
        is_correct,
        is_skipped,
        points_earned: u32::from(is_correct),
        points_total: 1,
        detail: ReviewDetail::Test {
            selected: choice.and_then(|c| options.get(c).cloned()),
            expected,
        },
    }
}

fn evaluate_blanks(
    index: usize,
    prompt: String,
    expected: Vec<Vec<String>>,
    answer: Option<&Answer>,
) -> ReviewItem {
    if expected.is_empty() {
        return skipped_with_note(index, "question has no blanks, not scored");
    }

    let given: &[String] = match answer {
        Some(Answer::Blanks(b)) => b,
        _ => &[],
    };

    let mut all_answered = true;
    let mut all_matched = true;
    let mut rows = Vec::with_capacity(expected.len());
    for (i, variants) in expected.iter().enumerate() {
        let raw = given.get(i).cloned().unwrap_or_default();
        let answered = !raw.trim().is_empty();
        if !answered {
            all_answered = false;
        }
        let matched = answered && matches_any(&raw, variants);
        if !matched {
            all_matched = false;
        }
        rows.push(BlankReview {
            index: i,
            given: raw,
            accepted: variants.clone(),
            matched,
        });
    }

    // all-or-nothing: every blank must be filled and every blank must match
    let is_skipped = !all_answered;
    let is_correct = all_answered && all_matched;
    ReviewItem {
        question_index: index,
        question: prompt,
        is_correct,
        is_skipped,
        points_earned: u32::from(is_correct),
        points_total: 1,
        detail: ReviewDetail::Blanks { rows },
    }
}

/// Structural comparison of an entered letter grid against a puzzle.
#[derive(Debug, Clone)]
pub struct CrosswordProgress {
    pub correct_words: u32,
    pub total_words: u32,
    /// Word-covered, non-blocked, in-bounds cells holding any letter.
    pub filled_cells: u32,
    pub fillable_cells: u32,
    pub words: Vec<WordReview>,
}

impl CrosswordProgress {
    pub fn fill_percent(&self) -> u32 {
        if self.fillable_cells == 0 {
            0
        } else {
            (f64::from(self.filled_cells) / f64::from(self.fillable_cells) * 100.0).round() as u32
        }
    }

    pub fn all_correct(&self) -> bool {
        self.total_words > 0 && self.correct_words == self.total_words
    }
}

/// Compare a student's entered grid against the puzzle word list.
///
/// A word is correct when every one of its cells is in bounds, not blocked,
/// and holds that word's letter in the entered grid (case-insensitive).
pub fn crossword_progress(puzzle: &CrosswordDocument, entered: &[Vec<String>]) -> CrosswordProgress {
    let rows = puzzle.metadata.rows;
    let cols = puzzle.metadata.cols;
    // `char::to_uppercase` can expand to several chars, so fold to strings.
    let entered_letter = |cell: CellRef| -> Option<String> {
        entered
            .get(cell.row)?
            .get(cell.col)?
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    };

    let mut fillable: HashSet<CellRef> = HashSet::new();
    let mut words = Vec::with_capacity(puzzle.words.len());
    let mut correct_words = 0u32;
    for word in &puzzle.words {
        let mut correct = true;
        for (i, cell) in word.cells().enumerate() {
            if cell.row >= rows || cell.col >= cols || puzzle.is_blocked(cell.row, cell.col) {
                correct = false;
                continue;
            }
            fillable.insert(cell);
            let wanted = word
                .text
                .chars()
                .nth(i)
                .map(|c| c.to_uppercase().collect::<String>());
            if entered_letter(cell) != wanted {
                correct = false;
            }
        }
        if correct {
            correct_words += 1;
        }
        words.push(WordReview {
            number: word.number,
            direction: word.direction,
            text: word.text.clone(),
            correct,
        });
    }

    let filled_cells = fillable
        .iter()
        .filter(|cell| entered_letter(**cell).is_some())
        .count() as u32;

    CrosswordProgress {
        correct_words,
        total_words: puzzle.words.len() as u32,
        filled_cells,
        fillable_cells: fillable.len() as u32,
        words,
    }
}

fn evaluate_crossword(
    index: usize,
    puzzle: &CrosswordDocument,
    answer: Option<&Answer>,
) -> ReviewItem {
    if puzzle.words.is_empty() {
        return skipped_with_note(index, "crossword has no words, not scored");
    }
    let entered: &[Vec<String>] = match answer {
        Some(Answer::Grid(g)) => g,
        _ => &[],
    };
    let progress = crossword_progress(puzzle, entered);
    let is_skipped = progress.filled_cells == 0;
    let is_correct = progress.all_correct();
    ReviewItem {
        question_index: index,
        question: String::new(),
        is_correct,
        is_skipped,
        points_earned: progress.correct_words,
        points_total: progress.total_words,
        detail: ReviewDetail::Crossword {
            correct_words: progress.correct_words,
            total_words: progress.total_words,
            fill_percent: progress.fill_percent(),
            words: progress.words,
        },
    }
}

fn aggregate(review: &[ReviewItem]) -> ScoreStats {
    let mut stats = ScoreStats::default();
    for item in review {
        stats.total += 1;
        if item.is_skipped {
            stats.skipped += 1;
        } else if item.is_correct {
            stats.correct += 1;
        } else {
            stats.incorrect += 1;
        }
        stats.points_earned += item.points_earned;
        stats.points_total += item.points_total;
    }
    stats.score = if stats.total > 0 {
        (f64::from(stats.correct) / f64::from(stats.total) * 100.0).round() as u32
    } else {
        0
    };
    stats
}
