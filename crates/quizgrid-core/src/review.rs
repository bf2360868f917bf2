//! Score report and per-question review types with JSON persistence.
//!
//! A [`ScoreReport`] is created once per scoring pass and never mutated
//! afterward; the student runtime renders it as the post-submission review
//! screen.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Direction;

/// The outcome of scoring one assignment submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the scoring pass ran.
    pub created_at: DateTime<Utc>,
    /// Aggregate counters and the 0-100 score.
    pub stats: ScoreStats,
    /// One entry per question, in question order.
    pub review: Vec<ReviewItem>,
}

impl ScoreReport {
    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

/// Aggregate counters across all questions.
///
/// `score = round(correct / total * 100)` where total counts every question
/// (correct + incorrect + skipped); 0 when there are no questions.
/// "Correct" means fully correct only; partially-correct questions land in
/// `incorrect`, with their partial credit visible in the points fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreStats {
    pub correct: u32,
    pub incorrect: u32,
    pub skipped: u32,
    pub total: u32,
    pub score: u32,
    pub points_earned: u32,
    pub points_total: u32,
}

/// Per-question outcome record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Index into the assignment's question list.
    pub question_index: usize,
    /// The question text, empty for types without one.
    pub question: String,
    pub is_correct: bool,
    pub is_skipped: bool,
    pub points_earned: u32,
    pub points_total: u32,
    pub detail: ReviewDetail,
}

/// Type-specific review payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReviewDetail {
    /// Label pair for a test question.
    Test {
        /// The option the student picked, if any and in range.
        selected: Option<String>,
        /// The correct option's label.
        expected: String,
    },
    /// Per-blank comparison rows for fill/sentence questions.
    Blanks { rows: Vec<BlankReview> },
    /// Word-correctness breakdown for a crossword question.
    Crossword {
        correct_words: u32,
        total_words: u32,
        /// Percent of fillable word cells holding any letter.
        fill_percent: u32,
        words: Vec<WordReview>,
    },
    /// Explanatory note (unknown question types, malformed answers).
    Note { message: String },
}

/// One blank's comparison row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlankReview {
    /// Blank position within the question.
    pub index: usize,
    /// The student's raw entry.
    pub given: String,
    /// The accepted variants, as authored.
    pub accepted: Vec<String>,
    pub matched: bool,
}

/// One word's correctness row, keyed by number + direction for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordReview {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
    pub correct: bool,
}
