//! The `quizgrid render` command.

use std::path::PathBuf;

use anyhow::Result;
use quizgrid_core::parser::load_crossword;

pub fn execute(crossword: PathBuf) -> Result<()> {
    let doc = load_crossword(&crossword)?;

    println!(
        "{}x{} | {} word(s) | {} block(s)\n",
        doc.metadata.rows,
        doc.metadata.cols,
        doc.words.len(),
        doc.blocks.len()
    );
    print!("{}", quizgrid_report::text::render_grid(&doc));

    if !doc.words.is_empty() {
        println!();
        print!("{}", quizgrid_report::text::render_words(&doc));
    }

    Ok(())
}
