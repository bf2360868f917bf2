//! The `quizgrid validate` command.

use std::path::PathBuf;

use anyhow::Result;
use quizgrid_core::parser::{
    self, load_assignment, load_assignment_directory, load_crossword, ValidationWarning,
};

pub fn execute(
    assignment: Option<PathBuf>,
    crossword: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let mut total_warnings = 0;

    match (assignment, crossword) {
        (Some(path), _) => {
            let contents = if path.is_dir() {
                load_assignment_directory(&path)?
            } else {
                vec![load_assignment(&path)?]
            };
            for content in &contents {
                println!("Assignment: {} question(s)", content.questions.len());
                let warnings = parser::validate_assignment(content);
                print_warnings(&warnings);
                total_warnings += warnings.len();
            }
        }
        (None, Some(path)) => {
            let doc = load_crossword(&path)?;
            println!(
                "Crossword: {}x{}, {} word(s), {} block(s)",
                doc.metadata.rows,
                doc.metadata.cols,
                doc.words.len(),
                doc.blocks.len()
            );
            let warnings = parser::validate_crossword(&doc);
            print_warnings(&warnings);
            total_warnings += warnings.len();
        }
        (None, None) => {
            anyhow::bail!("pass --assignment or --crossword");
        }
    }

    if total_warnings == 0 {
        println!("All documents valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
        if strict {
            anyhow::bail!("{total_warnings} warning(s) in strict mode");
        }
    }

    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) {
    for w in warnings {
        let prefix = w
            .location
            .as_ref()
            .map(|loc| format!("  [{loc}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
}
