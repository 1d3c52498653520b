//! The fixed style sheet applied to rendered documents.
//!
//! Every content kind renders through one of the text classes defined here.
//! The sheet is defined once ([`Stylesheet::default`]) and reused for every
//! item of a kind; values are in points (1 pt = 1/72 in).

use genpdf::style::{Color, Style};
use genpdf::Alignment;

/// Horizontal alignment of a rendered paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
    /// Fully justified paragraphs.
    Justified,
}

impl HorizontalAlignment {
    /// Maps the alignment onto [`genpdf::Alignment`].
    ///
    /// The composition library offers no justified layout, so `Justified`
    /// renders left aligned while the sheet keeps the declared intent.
    pub fn to_alignment(self) -> Alignment {
        match self {
            Self::Left | Self::Justified => Alignment::Left,
            Self::Center => Alignment::Center,
            Self::Right => Alignment::Right,
        }
    }
}

/// Typographic treatment shared by every paragraph of one content kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextClass {
    font_size: u8,
    bold: bool,
    alignment: HorizontalAlignment,
    space_before: f64,
    space_after: f64,
    leading: Option<f64>,
    indent: f64,
}

impl TextClass {
    /// Creates a class with the given font size, no emphasis, left
    /// alignment and no extra spacing.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            alignment: HorizontalAlignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            leading: None,
            indent: 0.0,
        }
    }

    /// Marks the class as bold and returns the updated class.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the alignment and returns the updated class.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the space above each paragraph (points) and returns the updated class.
    pub fn with_space_before(mut self, points: f64) -> Self {
        self.space_before = points;
        self
    }

    /// Sets the space below each paragraph (points) and returns the updated class.
    pub fn with_space_after(mut self, points: f64) -> Self {
        self.space_after = points;
        self
    }

    /// Sets the baseline distance (points) and returns the updated class.
    pub fn with_leading(mut self, points: f64) -> Self {
        self.leading = Some(points);
        self
    }

    /// Sets the left indent (points) and returns the updated class.
    pub fn with_indent(mut self, points: f64) -> Self {
        self.indent = points;
        self
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns whether the class renders bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Returns the space above each paragraph in points.
    pub fn space_before_pt(&self) -> f64 {
        self.space_before
    }

    /// Returns the space below each paragraph in points.
    pub fn space_after_pt(&self) -> f64 {
        self.space_after
    }

    /// Returns the explicitly configured baseline distance, if any.
    pub fn leading_pt(&self) -> Option<f64> {
        self.leading
    }

    /// Returns the effective baseline distance in points.
    ///
    /// Classes without an explicit leading fall back to 1.2 times the font
    /// size, the conventional default for body typesetting.
    pub fn line_leading_pt(&self) -> f64 {
        self.leading.unwrap_or(f64::from(self.font_size) * 1.2)
    }

    /// Returns the left indent in points.
    pub fn indent_pt(&self) -> f64 {
        self.indent
    }

    /// Builds the character-level [`Style`] for this class.
    ///
    /// Alignment, spacing and indent are layout concerns applied by the
    /// renderer; only font size and emphasis live on the style.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new();
        style.set_font_size(self.font_size);
        if self.bold {
            style.set_bold();
        }
        style
    }
}

/// The complete set of text classes and layout constants for one document.
#[derive(Clone, Debug)]
pub struct Stylesheet {
    title: TextClass,
    section: TextClass,
    subsection: TextClass,
    normal: TextClass,
    bold: TextClass,
    list_item: TextClass,
    notice: TextClass,
    notice_background: Color,
    notice_padding: f64,
}

impl Stylesheet {
    /// Vertical gap emitted for a blank source line, in points.
    pub const SPACER_GAP_PT: f64 = 6.0;
    /// Extra gap after the first title of the document, in points.
    pub const TITLE_FOLLOWUP_GAP_PT: f64 = 20.0;
    /// Gap emitted before every section heading, in points.
    pub const SECTION_LEAD_GAP_PT: f64 = 12.0;
    /// Gap emitted before every subsection heading, in points.
    pub const SUBSECTION_LEAD_GAP_PT: f64 = 8.0;
    /// Gap emitted before and after a separator rule, in points.
    pub const SEPARATOR_FRAME_GAP_PT: f64 = 15.0;
    /// Number of underscore glyphs forming a separator rule.
    pub const SEPARATOR_GLYPHS: usize = 80;
    /// Prefix prepended to list entries.
    pub const BULLET_PREFIX: &'static str = "\u{2022} ";

    /// Returns the document title class.
    pub fn title(&self) -> &TextClass {
        &self.title
    }

    /// Returns the section heading class.
    pub fn section(&self) -> &TextClass {
        &self.section
    }

    /// Returns the subsection heading class.
    pub fn subsection(&self) -> &TextClass {
        &self.subsection
    }

    /// Returns the body text class.
    pub fn normal(&self) -> &TextClass {
        &self.normal
    }

    /// Returns the whole-line bold class.
    pub fn bold(&self) -> &TextClass {
        &self.bold
    }

    /// Returns the bulleted list class.
    pub fn list_item(&self) -> &TextClass {
        &self.list_item
    }

    /// Returns the legal notice class.
    pub fn notice(&self) -> &TextClass {
        &self.notice
    }

    /// Returns the background shade of the legal notice box.
    pub fn notice_background(&self) -> Color {
        self.notice_background
    }

    /// Returns the padding around legal notice text in points.
    pub fn notice_padding_pt(&self) -> f64 {
        self.notice_padding
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            title: TextClass::new(24)
                .bold()
                .with_alignment(HorizontalAlignment::Center)
                .with_space_after(30.0),
            section: TextClass::new(14)
                .bold()
                .with_space_before(20.0)
                .with_space_after(12.0),
            subsection: TextClass::new(12)
                .bold()
                .with_space_before(12.0)
                .with_space_after(8.0),
            normal: TextClass::new(10)
                .with_alignment(HorizontalAlignment::Justified)
                .with_space_after(8.0)
                .with_leading(14.0),
            bold: TextClass::new(10)
                .bold()
                .with_space_after(8.0)
                .with_leading(14.0),
            list_item: TextClass::new(10)
                .with_space_after(6.0)
                .with_leading(14.0)
                .with_indent(20.0),
            notice: TextClass::new(11)
                .bold()
                .with_space_before(15.0)
                .with_space_after(15.0)
                .with_leading(16.0),
            notice_background: Color::Rgb(0xF5, 0xF5, 0xF5),
            notice_padding: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HorizontalAlignment, Stylesheet, TextClass};
    use genpdf::style::Color;
    use genpdf::Alignment;

    #[test]
    fn justified_renders_left_aligned() {
        assert_eq!(HorizontalAlignment::Justified.to_alignment(), Alignment::Left);
        assert_eq!(HorizontalAlignment::Center.to_alignment(), Alignment::Center);
    }

    #[test]
    fn leading_falls_back_to_font_size_scaling() {
        let class = TextClass::new(10);
        assert_eq!(class.leading_pt(), None);
        assert!((class.line_leading_pt() - 12.0).abs() < 1e-9);

        let explicit = TextClass::new(10).with_leading(14.0);
        assert_eq!(explicit.leading_pt(), Some(14.0));
        assert!((explicit.line_leading_pt() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn text_style_carries_size_and_emphasis_only() {
        let style = TextClass::new(14).bold().text_style();
        assert_eq!(style.font_size(), 14);
        assert!(style.is_bold());
        assert_eq!(style.color(), None);
    }

    #[test]
    fn default_sheet_matches_the_document_design() {
        let sheet = Stylesheet::default();

        assert_eq!(sheet.title().font_size(), 24);
        assert!(sheet.title().is_bold());
        assert_eq!(sheet.title().alignment(), HorizontalAlignment::Center);
        assert_eq!(sheet.title().space_after_pt(), 30.0);

        assert_eq!(sheet.section().font_size(), 14);
        assert_eq!(sheet.section().space_before_pt(), 20.0);
        assert_eq!(sheet.section().space_after_pt(), 12.0);

        assert_eq!(sheet.subsection().font_size(), 12);
        assert_eq!(sheet.subsection().space_before_pt(), 12.0);
        assert_eq!(sheet.subsection().space_after_pt(), 8.0);

        assert_eq!(sheet.normal().font_size(), 10);
        assert!(!sheet.normal().is_bold());
        assert_eq!(sheet.normal().alignment(), HorizontalAlignment::Justified);
        assert_eq!(sheet.normal().leading_pt(), Some(14.0));

        assert_eq!(sheet.bold().font_size(), 10);
        assert!(sheet.bold().is_bold());
        assert_eq!(sheet.bold().alignment(), HorizontalAlignment::Left);

        assert_eq!(sheet.list_item().indent_pt(), 20.0);
        assert_eq!(sheet.list_item().space_after_pt(), 6.0);

        assert_eq!(sheet.notice().font_size(), 11);
        assert!(sheet.notice().is_bold());
        assert_eq!(sheet.notice().leading_pt(), Some(16.0));
        assert_eq!(sheet.notice().space_before_pt(), 15.0);
        assert_eq!(sheet.notice_background(), Color::Rgb(0xF5, 0xF5, 0xF5));
        assert_eq!(sheet.notice_padding_pt(), 10.0);
    }
}
