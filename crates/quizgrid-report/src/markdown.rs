//! Markdown review rendering.

use quizgrid_core::review::{ReviewDetail, ReviewItem, ScoreReport};

/// Render a score report as markdown, one section per question.
pub fn render(report: &ScoreReport) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "**Score: {}%** — {} correct, {} incorrect, {} skipped ({} points of {})\n\n",
        report.stats.score,
        report.stats.correct,
        report.stats.incorrect,
        report.stats.skipped,
        report.stats.points_earned,
        report.stats.points_total,
    ));

    for item in &report.review {
        md.push_str(&render_item(item));
        md.push('\n');
    }

    md
}

fn outcome(item: &ReviewItem) -> &'static str {
    if item.is_skipped {
        "skipped"
    } else if item.is_correct {
        "correct"
    } else {
        "incorrect"
    }
}

fn render_item(item: &ReviewItem) -> String {
    let mut md = String::new();
    let title = if item.question.is_empty() {
        format!("Question {}", item.question_index + 1)
    } else {
        format!("Question {}: {}", item.question_index + 1, item.question)
    };
    md.push_str(&format!("### {title}\n\n"));
    md.push_str(&format!(
        "_{}_ ({}/{} points)\n\n",
        outcome(item),
        item.points_earned,
        item.points_total
    ));

    match &item.detail {
        ReviewDetail::Test { selected, expected } => {
            md.push_str(&format!(
                "Your answer: {} — correct answer: {}\n",
                selected.as_deref().unwrap_or("(none)"),
                expected
            ));
        }
        ReviewDetail::Blanks { rows } => {
            md.push_str("| Blank | Your answer | Accepted | Match |\n");
            md.push_str("|-------|-------------|----------|-------|\n");
            for row in rows {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    row.index + 1,
                    if row.given.is_empty() { "(empty)" } else { row.given.as_str() },
                    row.accepted.join(", "),
                    if row.matched { "yes" } else { "no" },
                ));
            }
        }
        ReviewDetail::Crossword {
            correct_words,
            total_words,
            fill_percent,
            words,
        } => {
            md.push_str(&format!(
                "{correct_words} of {total_words} words correct, {fill_percent}% filled\n\n"
            ));
            md.push_str("| Word | Result |\n");
            md.push_str("|------|--------|\n");
            for w in words {
                md.push_str(&format!(
                    "| {} {} ({}) | {} |\n",
                    w.number,
                    w.direction,
                    w.text,
                    if w.correct { "correct" } else { "incorrect" },
                ));
            }
        }
        ReviewDetail::Note { message } => {
            md.push_str(&format!("_{message}_\n"));
        }
    }

    md
}
