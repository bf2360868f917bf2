//! The `quizgrid score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use quizgrid_core::parser::load_assignment;
use quizgrid_core::review::ScoreReport;
use quizgrid_core::scoring::{parse_answers, score};

pub fn execute(
    assignment: PathBuf,
    answers: PathBuf,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let content = load_assignment(&assignment)?;

    let answers_raw = std::fs::read_to_string(&answers)
        .with_context(|| format!("failed to read answers file: {}", answers.display()))?;
    let answers_value: serde_json::Value =
        serde_json::from_str(&answers_raw).context("failed to parse answers JSON")?;
    let answer_list = parse_answers(&answers_value);

    let report = score(&content.questions, &answer_list);

    print_summary(&report);

    if let Some(path) = output {
        match format.as_str() {
            "json" => report.save_json(&path)?,
            "markdown" => std::fs::write(&path, quizgrid_report::markdown::render(&report))
                .with_context(|| format!("failed to write {}", path.display()))?,
            "html" => std::fs::write(&path, quizgrid_report::html::render(&report))
                .with_context(|| format!("failed to write {}", path.display()))?,
            other => anyhow::bail!("unknown format: {other} (expected json, markdown, or html)"),
        }
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &ScoreReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Question", "Outcome", "Points"]);
    for item in &report.review {
        let outcome = if item.is_skipped {
            "skipped"
        } else if item.is_correct {
            "correct"
        } else {
            "incorrect"
        };
        let question = if item.question.is_empty() {
            "(crossword)".to_string()
        } else {
            item.question.clone()
        };
        table.add_row(vec![
            Cell::new(item.question_index + 1),
            Cell::new(question),
            Cell::new(outcome),
            Cell::new(format!("{}/{}", item.points_earned, item.points_total)),
        ]);
    }
    println!("{table}");
    println!(
        "Score: {}% ({} correct, {} incorrect, {} skipped)",
        report.stats.score, report.stats.correct, report.stats.incorrect, report.stats.skipped
    );
}
