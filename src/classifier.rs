//! Line classification for the markdown-like source dialect.
//!
//! Classification looks at each line in isolation: the tag is decided by the
//! line's leading characters alone, never by surrounding lines.  The rules
//! are applied top to bottom and the first match wins.

use crate::model::ContentItem;

/// Classifies a whole source document into an ordered item sequence.
///
/// Lines are split with [`str::lines`], so a trailing newline at the end of
/// the file does not produce a trailing spacer item.
pub fn classify(text: &str) -> Vec<ContentItem> {
    let items: Vec<ContentItem> = text.lines().map(classify_line).collect();
    log::debug!("classified {} source lines", items.len());
    items
}

/// Classifies a single source line.
///
/// Trailing whitespace (including a stray `\r`) is stripped before the rules
/// run; leading whitespace is preserved for body text.
pub fn classify_line(line: &str) -> ContentItem {
    let line = line.trim_end();

    if line.is_empty() {
        ContentItem::spacer()
    } else if let Some(rest) = line.strip_prefix("# ") {
        ContentItem::title(rest.trim())
    } else if let Some(rest) = line.strip_prefix("## ") {
        ContentItem::section(rest.trim())
    } else if let Some(rest) = line.strip_prefix("### ") {
        ContentItem::subsection(rest.trim())
    } else if line.starts_with("---") {
        ContentItem::separator()
    } else if let Some(rest) = line.strip_prefix("- ") {
        ContentItem::list_item(rest.trim())
    } else {
        // Lines opening with ** markup land here as well; inline formatting
        // handles the emphasis.
        ContentItem::normal(line)
    }
}
