//! HTML review rendering.
//!
//! Produces a self-contained HTML file with the CSS inlined, suitable for
//! emailing to a student or attaching to an admin record.

use quizgrid_core::review::{ReviewDetail, ReviewItem, ScoreReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a score report.
pub fn render(report: &ScoreReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>quizgrid score report</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>Score: {}%</h1>\n", report.stats.score));
    html.push_str(&format!(
        "<p class=\"meta\">{} correct | {} incorrect | {} skipped | {} of {} points | {}</p>\n",
        report.stats.correct,
        report.stats.incorrect,
        report.stats.skipped,
        report.stats.points_earned,
        report.stats.points_total,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    for item in &report.review {
        html.push_str(&render_item(item));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_item(item: &ReviewItem) -> String {
    let mut html = String::new();
    let class = if item.is_skipped {
        "skipped"
    } else if item.is_correct {
        "correct"
    } else {
        "incorrect"
    };
    html.push_str(&format!("<section class=\"question {class}\">\n"));
    let title = if item.question.is_empty() {
        format!("Question {}", item.question_index + 1)
    } else {
        format!(
            "Question {}: {}",
            item.question_index + 1,
            html_escape(&item.question)
        )
    };
    html.push_str(&format!("<h2>{title}</h2>\n"));
    html.push_str(&format!(
        "<p class=\"outcome\">{class} ({}/{} points)</p>\n",
        item.points_earned, item.points_total
    ));

    match &item.detail {
        ReviewDetail::Test { selected, expected } => {
            html.push_str(&format!(
                "<p>Your answer: <strong>{}</strong> — correct answer: <strong>{}</strong></p>\n",
                html_escape(selected.as_deref().unwrap_or("(none)")),
                html_escape(expected)
            ));
        }
        ReviewDetail::Blanks { rows } => {
            html.push_str("<table><thead><tr><th>Blank</th><th>Your answer</th><th>Accepted</th><th>Match</th></tr></thead>\n<tbody>\n");
            for row in rows {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    row.index + 1,
                    html_escape(&row.given),
                    html_escape(&row.accepted.join(", ")),
                    if row.matched { "yes" } else { "no" },
                ));
            }
            html.push_str("</tbody></table>\n");
        }
        ReviewDetail::Crossword {
            correct_words,
            total_words,
            fill_percent,
            words,
        } => {
            html.push_str(&format!(
                "<p>{correct_words} of {total_words} words correct, {fill_percent}% filled</p>\n"
            ));
            html.push_str(
                "<table><thead><tr><th>Word</th><th>Result</th></tr></thead>\n<tbody>\n",
            );
            for w in words {
                html.push_str(&format!(
                    "<tr><td>{} {} ({})</td><td>{}</td></tr>\n",
                    w.number,
                    w.direction,
                    html_escape(&w.text),
                    if w.correct { "correct" } else { "incorrect" },
                ));
            }
            html.push_str("</tbody></table>\n");
        }
        ReviewDetail::Note { message } => {
            html.push_str(&format!("<p class=\"note\">{}</p>\n", html_escape(message)));
        }
    }

    html.push_str("</section>\n");
    html
}

const CSS: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem auto; max-width: 48rem; color: #1a1a2e; }
header { border-bottom: 2px solid #e0e0e0; margin-bottom: 1.5rem; }
h1 { margin-bottom: 0.25rem; }
.meta { color: #666; font-size: 0.9rem; }
.question { border-left: 4px solid #ccc; padding: 0.5rem 1rem; margin-bottom: 1rem; }
.question.correct { border-left-color: #2e9e5b; }
.question.incorrect { border-left-color: #d64550; }
.question.skipped { border-left-color: #c9a227; }
.outcome { font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.05em; color: #666; }
table { border-collapse: collapse; width: 100%; margin: 0.5rem 0; }
th, td { border: 1px solid #e0e0e0; padding: 0.35rem 0.6rem; text-align: left; font-size: 0.9rem; }
th { background: #f7f7f9; }
.note { font-style: italic; color: #666; }
"#;
