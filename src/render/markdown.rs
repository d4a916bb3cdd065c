//! Table-of-contents rendering in Markdown.

use crate::model::OutlineDocument;

/// Render an outline as a Markdown table of contents.
///
/// The title becomes a level-1 heading; entries become a bullet list
/// indented two spaces per level below H1, each with its page number.
pub fn to_markdown(doc: &OutlineDocument) -> String {
    let mut out = String::new();

    if !doc.title.is_empty() {
        out.push_str("# ");
        out.push_str(&escape_markdown(&doc.title));
        out.push_str("\n\n");
    }

    for entry in &doc.outline {
        let indent = "  ".repeat(usize::from(entry.level.depth() - 1));
        out.push_str(&format!(
            "{}- {} (p. {})\n",
            indent,
            escape_markdown(&entry.text),
            entry.page
        ));
    }

    out
}

/// Escape characters that would otherwise start Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
