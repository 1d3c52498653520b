//! Inline markup handling for classified payload text.
//!
//! Payloads arrive carrying a markdown-like emphasis syntax (`**bold**`).
//! [`format_markup`] normalizes a payload into a small rich-text dialect
//! (entity-escaped text with `<b>`/`</b>` emphasis tags), and [`parse_spans`]
//! turns that dialect into [`Span`] values ready to become
//! [`genpdf::style::StyledString`]s.  The round trip through the dialect
//! keeps the escaping rules in one place and makes the formatter output
//! directly assertable in tests.

use genpdf::style::{Style, StyledString};

/// A text fragment together with its inline emphasis flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
}

impl Span {
    /// Creates a new span with the provided text and no emphasis.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Marks the span as bold and returns the updated span.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builds the [`Style`] contribution of this span.
    ///
    /// Only the emphasis flag is set; merging the result into a paragraph
    /// class style leaves the class font size, color and alignment intact.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        style
    }

    /// Converts the span to a [`StyledString`].
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

impl From<Span> for StyledString {
    fn from(span: Span) -> Self {
        span.to_styled_string()
    }
}

/// Normalizes a raw payload into the rich-text dialect.
///
/// Three transformations run in order:
///
/// 1. `&`, `<` and `>` are escaped to `&amp;`, `&lt;` and `&gt;`, so source
///    text can never smuggle tags into the dialect;
/// 2. `**` delimiters are converted pairwise into `<b>`/`</b>`; an odd
///    delimiter count leaves a final unterminated `<b>`, which is accepted
///    as-is rather than rejected;
/// 3. runs of two or more spaces collapse to a single space.  Only the plain
///    space character is collapsed; tabs survive untouched.
pub fn format_markup(raw: &str) -> String {
    let mut text = raw
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    let mut opening = true;
    while let Some(pos) = text.find("**") {
        text.replace_range(pos..pos + 2, if opening { "<b>" } else { "</b>" });
        opening = !opening;
    }

    collapse_spaces(&text)
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_was_space = false;
    for ch in text.chars() {
        if ch == ' ' && previous_was_space {
            continue;
        }
        previous_was_space = ch == ' ';
        out.push(ch);
    }
    out
}

/// Parses the dialect emitted by [`format_markup`] into a list of [`Span`]s.
///
/// The parser is deliberately lenient because malformed emphasis is a
/// rendering artifact, not an error: an unterminated `<b>` bolds the rest of
/// the text, and a stray `</b>` simply clears the flag.  The three entities
/// decode back to their literal characters; everything else is plain text.
pub fn parse_spans(markup: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut bold = false;
    let mut index = 0;

    while index < markup.len() {
        let rest = &markup[index..];

        if rest.starts_with("<b>") {
            flush_buffer(&mut buffer, &mut spans, bold);
            bold = true;
            index += 3;
            continue;
        }
        if rest.starts_with("</b>") {
            flush_buffer(&mut buffer, &mut spans, bold);
            bold = false;
            index += 4;
            continue;
        }
        if rest.starts_with("&amp;") {
            buffer.push('&');
            index += 5;
            continue;
        }
        if rest.starts_with("&lt;") {
            buffer.push('<');
            index += 4;
            continue;
        }
        if rest.starts_with("&gt;") {
            buffer.push('>');
            index += 4;
            continue;
        }

        let ch = rest.chars().next().expect("character extraction succeeded");
        buffer.push(ch);
        index += ch.len_utf8();
    }

    flush_buffer(&mut buffer, &mut spans, bold);
    spans
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, bold: bool) {
    if buffer.is_empty() {
        return;
    }
    let span = Span::new(std::mem::take(buffer));
    spans.push(if bold { span.bold() } else { span });
}

#[cfg(test)]
mod tests {
    use super::{format_markup, parse_spans, Span};

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(format_markup("A & B <C>"), "A &amp; B &lt;C&gt;");
    }

    #[test]
    fn bold_delimiters_become_tag_pairs() {
        assert_eq!(format_markup("Some **bold** word"), "Some <b>bold</b> word");
        assert_eq!(format_markup("**a** and **b**"), "<b>a</b> and <b>b</b>");
    }

    #[test]
    fn odd_delimiter_count_leaves_an_open_tag() {
        assert_eq!(format_markup("**oops"), "<b>oops");
    }

    #[test]
    fn escaping_runs_before_tag_injection() {
        assert_eq!(format_markup("**a & b**"), "<b>a &amp; b</b>");
    }

    #[test]
    fn space_runs_collapse_but_tabs_survive() {
        assert_eq!(format_markup("a    b"), "a b");
        assert_eq!(format_markup("a \t b"), "a \t b");
        assert_eq!(format_markup("  padded  "), " padded ");
    }

    #[test]
    fn plain_text_parses_to_a_single_span() {
        let spans = parse_spans("Hello world");
        assert_eq!(spans, vec![Span::new("Hello world")]);
    }

    #[test]
    fn tag_pairs_toggle_the_emphasis_flag() {
        let spans = parse_spans("Some <b>bold</b> word");
        assert_eq!(
            spans,
            vec![
                Span::new("Some "),
                Span::new("bold").bold(),
                Span::new(" word"),
            ]
        );
    }

    #[test]
    fn entities_decode_to_literal_characters() {
        let spans = parse_spans("A &amp; B &lt;C&gt;");
        assert_eq!(spans, vec![Span::new("A & B <C>")]);
    }

    #[test]
    fn unterminated_tag_bolds_the_remainder() {
        let spans = parse_spans("<b>oops");
        assert_eq!(spans, vec![Span::new("oops").bold()]);
    }

    #[test]
    fn stray_closing_tag_is_tolerated() {
        let spans = parse_spans("a</b>b");
        assert_eq!(spans, vec![Span::new("a"), Span::new("b")]);
    }

    #[test]
    fn adjacent_tags_produce_no_empty_spans() {
        assert_eq!(parse_spans("<b></b>x"), vec![Span::new("x")]);
        assert_eq!(parse_spans(""), Vec::new());
    }

    #[test]
    fn formatter_output_round_trips_through_the_parser() {
        let spans = parse_spans(&format_markup("Fee: **$5** & up"));
        assert_eq!(
            spans,
            vec![
                Span::new("Fee: "),
                Span::new("$5").bold(),
                Span::new(" & up"),
            ]
        );
    }

    #[test]
    fn span_styles_reflect_the_emphasis_flag() {
        let styled = Span::new("x").bold().to_styled_string();
        assert_eq!(styled.s, "x");
        assert!(styled.style.is_bold());

        let plain = Span::new("y").to_styled_string();
        assert!(!plain.style.is_bold());
    }
}
