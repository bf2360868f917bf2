//! Plain-text crossword rendering for terminal display.

use quizgrid_core::model::CrosswordDocument;

/// Render the grid as ASCII: `#` for blocks, `.` for empty cells, letters
/// as themselves.
pub fn render_grid(doc: &CrosswordDocument) -> String {
    let mut out = String::new();
    for row in 0..doc.metadata.rows {
        for col in 0..doc.metadata.cols {
            if col > 0 {
                out.push(' ');
            }
            if doc.is_blocked(row, col) {
                out.push('#');
            } else {
                match doc.grid.letter(row, col) {
                    Some(ch) => out.push(ch),
                    None => out.push('.'),
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render the word list as clue-style lines, across first.
pub fn render_words(doc: &CrosswordDocument) -> String {
    let mut words: Vec<_> = doc.words.iter().collect();
    words.sort_by_key(|w| (w.direction != quizgrid_core::model::Direction::Across, w.number));

    let mut out = String::new();
    for w in words {
        out.push_str(&format!(
            "{:>3} {:<6} {} ({},{})\n",
            w.number, w.direction.to_string(), w.text, w.start.row, w.start.col
        ));
    }
    out
}
