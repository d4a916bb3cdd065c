//! Repair of letter-spaced text.
//!
//! Some producers draw headings glyph by glyph with visible gaps, so the
//! extracted line reads `"F r o n t e n d"`. Runs of two or more
//! single-letter tokens are joined back into one word. A gap of two or more
//! whitespace characters breaks a word only where a multi-letter word sits
//! on one side of it, so `"F r o n t e n d   A s s i g n m e n t"` stays two
//! words while `"T  I  T  L  E"` still becomes one.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

fn wide_gap_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").unwrap())
}

/// Normalize a line of text.
///
/// Applies NFC, trims, joins letter-spaced runs and collapses every
/// remaining whitespace run to a single space. Isolated single letters
/// (articles, initials) are left alone.
///
/// # Example
///
/// ```
/// use pdf_outline::parser::normalize_text;
///
/// assert_eq!(
///     normalize_text("F r o n t e n d   A s s i g n m e n t  is due"),
///     "Frontend Assignment is due"
/// );
/// ```
pub fn normalize_text(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut words: Vec<String> = Vec::new();
    for segment in wide_gap_regex().split(text) {
        join_letter_runs(segment.split_whitespace(), &mut words);
    }

    // Single letters left on both sides of a wide gap still belong together
    let mut merged: Vec<String> = Vec::with_capacity(words.len());
    join_letter_runs(words.iter().map(String::as_str), &mut merged);
    merged.join(" ")
}

/// Push the tokens of one segment, merging runs of single letters.
fn join_letter_runs<'a, I>(tokens: I, out: &mut Vec<String>)
where
    I: Iterator<Item = &'a str>,
{
    let mut run: Vec<&str> = Vec::new();
    for token in tokens {
        if is_single_letter(token) {
            run.push(token);
            continue;
        }
        flush_run(&mut run, out);
        out.push(token.to_string());
    }
    flush_run(&mut run, out);
}

fn flush_run(run: &mut Vec<&str>, out: &mut Vec<String>) {
    match run.len() {
        0 => {}
        1 => out.push(run[0].to_string()),
        _ => out.push(run.concat()),
    }
    run.clear();
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}
