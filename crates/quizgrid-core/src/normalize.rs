//! Free-text answer canonicalization.
//!
//! Students type answers on phones and with different keyboard layouts, so
//! comparison has to be insensitive to case, apostrophe variants, and
//! whitespace noise. Steps run in a fixed order: lowercase, unify
//! apostrophe-like characters, drop whitespace around apostrophes, collapse
//! whitespace runs, trim. The function is idempotent.

/// Characters treated as apostrophes and unified to `'`.
const APOSTROPHES: [char; 3] = ['\u{2019}', '`', '\u{00B4}'];

/// Canonicalize an answer for comparison.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        let ch = if APOSTROPHES.contains(&ch) { '\'' } else { ch };
        if ch.is_whitespace() {
            // leading whitespace never produces a separator; trailing
            // whitespace stays pending and is dropped at the end
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if ch == '\'' {
            // no space before an apostrophe
            pending_space = false;
        } else if pending_space && !out.ends_with('\'') {
            // no space after one either
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}

/// Whether `given` matches any accepted variant after normalization.
pub fn matches_any(given: &str, variants: &[String]) -> bool {
    let given = normalize(given);
    variants.iter().any(|v| normalize(v) == given)
}
