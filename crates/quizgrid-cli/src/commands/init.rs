//! The `quizgrid init` command: starter documents to edit from.

use std::path::PathBuf;

use anyhow::{Context, Result};
use quizgrid_core::editor::CrosswordEditor;
use quizgrid_core::model::{Assignment, AssignmentContent, CellRef, Direction, Question};

pub fn execute(dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let assignment_path = dir.join("assignment.json");
    let crossword_path = dir.join("crossword.json");

    for path in [&assignment_path, &crossword_path] {
        if path.exists() {
            anyhow::bail!("{} already exists, not overwriting", path.display());
        }
    }

    let assignment = starter_assignment();
    std::fs::write(
        &assignment_path,
        serde_json::to_string_pretty(&assignment).context("failed to serialize assignment")?,
    )
    .with_context(|| format!("failed to write {}", assignment_path.display()))?;
    println!("Wrote {}", assignment_path.display());

    let crossword = starter_crossword()?;
    std::fs::write(
        &crossword_path,
        serde_json::to_string_pretty(&crossword).context("failed to serialize crossword")?,
    )
    .with_context(|| format!("failed to write {}", crossword_path.display()))?;
    println!("Wrote {}", crossword_path.display());

    Ok(())
}

fn starter_assignment() -> Assignment {
    Assignment {
        title: "Starter assignment".into(),
        content: AssignmentContent {
            questions: vec![
                Question::Test {
                    q: "Which animal says meow?".into(),
                    image: None,
                    options: vec!["Dog".into(), "Cat".into(), "Cow".into()],
                    correct: 1,
                },
                Question::Fill {
                    q: "Name a small feline pet".into(),
                    image: None,
                    answers: vec![vec!["cat".into(), "kitty".into()]],
                },
                Question::Sentence {
                    q: None,
                    image: None,
                    sentence: "I ___ to school every ___.".into(),
                    answers: vec![
                        vec!["go".into(), "walk".into()],
                        vec!["day".into(), "morning".into()],
                    ],
                },
            ],
        },
    }
}

fn starter_crossword() -> Result<quizgrid_core::model::CrosswordDocument> {
    let mut editor = CrosswordEditor::new(7, 7);
    editor
        .place_word("cat", Direction::Across, 1, CellRef::new(0, 0))
        .map_err(|e| anyhow::anyhow!("starter placement failed: {e}"))?;
    editor
        .place_word("tin", Direction::Down, 2, CellRef::new(0, 2))
        .map_err(|e| anyhow::anyhow!("starter placement failed: {e}"))?;
    Ok(editor.into_document())
}
