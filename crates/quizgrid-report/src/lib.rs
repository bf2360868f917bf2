//! quizgrid-report — score-report rendering.
//!
//! Turns a `ScoreReport` into markdown or a self-contained HTML page, and
//! renders crossword documents as plain text for terminal display.

pub mod html;
pub mod markdown;
pub mod text;
