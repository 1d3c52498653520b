//! Turns classified content sequences into finished PDF documents.
//!
//! The renderer walks the item sequence once, translating every item into
//! zero or more emissions (gaps, paragraphs, a notice box) according to the
//! style sheet, and hands the resulting elements to `genpdf` for pagination
//! and serialization.  The emission step is exposed through [`plan`] so the
//! layout decisions stay testable without composing an actual PDF.
//!
//! [`plan`]: DocumentRenderer::plan

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::{Element, Margins, PaperSize, SimplePageDecorator, Size};
use log::debug;

use crate::elements::{mm_from_pt, FixedGap, NoticeBox};
use crate::error::{Error, Result};
use crate::fonts;
use crate::model::{ContentItem, ContentKind};
use crate::richtext::{format_markup, parse_spans};
use crate::styles::{Stylesheet, TextClass};

/// Returns whether a body line gets the distinguished legal notice treatment.
///
/// The check runs on the raw payload before any markup formatting: either
/// the exact-case phrase `NOTICE: BY CLICKING` appears, or the phrase
/// `CONSPICUOUS NOTICE` appears in any casing.
pub fn is_legal_notice(text: &str) -> bool {
    text.contains("NOTICE: BY CLICKING") || text.to_uppercase().contains("CONSPICUOUS NOTICE")
}

/// One layout decision produced for a content item.
///
/// A single item can expand to several emissions (a heading is preceded by
/// its gap, a separator is framed by two), or to none at all (blank body
/// text).
#[derive(Clone, Debug, PartialEq)]
pub enum Emission {
    /// A fixed vertical gap, in points.
    Gap(f64),
    /// A paragraph carrying rich-text markup, set in the given class.
    Paragraph {
        /// Markup as produced by [`format_markup`].
        markup: String,
        /// Text class the paragraph is set in.
        class: TextClass,
    },
    /// A shaded notice box carrying rich-text markup.
    Notice {
        /// Markup as produced by [`format_markup`].
        markup: String,
        /// Text class the notice text is set in.
        class: TextClass,
    },
}

/// Renders classified content into paginated PDF documents.
///
/// The renderer is configured once and can be reused for any number of
/// documents.  All settings have defaults matching the standard document
/// design: US Letter paper, one inch margins, the default style sheet.
pub struct DocumentRenderer {
    stylesheet: Stylesheet,
    paper_size: Size,
    margins: Margins,
    title: Option<String>,
    fonts_dir: Option<PathBuf>,
    #[cfg(feature = "hyphenation")]
    hyphenator: Option<hyphenation::Standard>,
}

impl DocumentRenderer {
    /// Creates a renderer with the default configuration.
    pub fn new() -> Self {
        Self {
            stylesheet: Stylesheet::default(),
            paper_size: PaperSize::Letter.into(),
            margins: Margins::all(mm_from_pt(72.0)),
            title: None,
            fonts_dir: None,
            #[cfg(feature = "hyphenation")]
            hyphenator: None,
        }
    }

    /// Replaces the style sheet and returns the updated renderer.
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Sets the paper size and returns the updated renderer.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Sets the page margins and returns the updated renderer.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = margins.into();
        self
    }

    /// Sets the document title metadata and returns the updated renderer.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Uses an explicit font metrics directory instead of the default
    /// search order and returns the updated renderer.
    pub fn with_fonts_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(directory.into());
        self
    }

    /// Enables hyphenation using the provided dictionary and returns the
    /// updated renderer.
    #[cfg(feature = "hyphenation")]
    pub fn with_hyphenator(mut self, hyphenator: hyphenation::Standard) -> Self {
        self.hyphenator = Some(hyphenator);
        self
    }

    /// Returns the style sheet in use.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Computes the full emission sequence for the given items.
    ///
    /// The sequence reflects every layout decision the renderer takes: gap
    /// placement, the one-time gap after the first title, blank body
    /// suppression and notice detection.
    pub fn plan(&self, items: &[ContentItem]) -> Vec<Emission> {
        let mut first_title = true;
        items
            .iter()
            .flat_map(|item| self.emissions(item, &mut first_title))
            .collect()
    }

    /// Renders the items into PDF bytes.
    pub fn render(&self, items: &[ContentItem]) -> Result<Vec<u8>> {
        debug!("rendering {} content items", items.len());
        let document = self.compose(items)?;
        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(Error::Compose)?;
        debug!("rendered {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Renders the items and writes the result to `path`.
    pub fn render_to_file(&self, items: &[ContentItem], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render(items)?;
        fs::write(path, bytes).map_err(|source| Error::Output {
            path: path.to_owned(),
            source,
        })
    }

    fn compose(&self, items: &[ContentItem]) -> Result<genpdf::Document> {
        let font_family = match &self.fonts_dir {
            Some(directory) => fonts::font_family_from_dir(directory),
            None => fonts::default_font_family(),
        }
        .map_err(Error::FontLoad)?;

        let mut document = genpdf::Document::new(font_family);
        if let Some(title) = &self.title {
            document.set_title(title.clone());
        }
        document.set_paper_size(self.paper_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins);
        document.set_page_decorator(decorator);

        #[cfg(feature = "hyphenation")]
        if let Some(hyphenator) = self.hyphenator.clone() {
            document.set_hyphenator(hyphenator);
        }

        for emission in self.plan(items) {
            match emission {
                Emission::Gap(points) => document.push(FixedGap::from_points(points)),
                Emission::Paragraph { markup, class } => {
                    document.push(markup_paragraph(&markup, &class));
                }
                Emission::Notice { markup, class } => {
                    document.push(self.notice_box(&markup, &class));
                }
            }
        }

        Ok(document)
    }

    fn emissions(&self, item: &ContentItem, first_title: &mut bool) -> Vec<Emission> {
        let payload = item.text().unwrap_or_default();
        match item.kind() {
            ContentKind::Spacer => vec![Emission::Gap(Stylesheet::SPACER_GAP_PT)],
            ContentKind::Title => {
                let mut emissions =
                    vec![paragraph_emission(payload, self.stylesheet.title())];
                if *first_title {
                    emissions.push(Emission::Gap(Stylesheet::TITLE_FOLLOWUP_GAP_PT));
                    *first_title = false;
                }
                emissions
            }
            ContentKind::Section => vec![
                Emission::Gap(Stylesheet::SECTION_LEAD_GAP_PT),
                paragraph_emission(payload, self.stylesheet.section()),
            ],
            ContentKind::Subsection => vec![
                Emission::Gap(Stylesheet::SUBSECTION_LEAD_GAP_PT),
                paragraph_emission(payload, self.stylesheet.subsection()),
            ],
            ContentKind::Bold => {
                // Any literal ** markers are dropped wholesale before
                // formatting; the class itself provides the emphasis.
                let cleaned = payload.replace("**", "");
                vec![paragraph_emission(&cleaned, self.stylesheet.bold())]
            }
            ContentKind::Separator => vec![
                Emission::Gap(Stylesheet::SEPARATOR_FRAME_GAP_PT),
                Emission::Paragraph {
                    markup: "_".repeat(Stylesheet::SEPARATOR_GLYPHS),
                    class: *self.stylesheet.normal(),
                },
                Emission::Gap(Stylesheet::SEPARATOR_FRAME_GAP_PT),
            ],
            ContentKind::ListItem => {
                let markup = format!(
                    "{}{}",
                    Stylesheet::BULLET_PREFIX,
                    format_markup(payload)
                );
                vec![Emission::Paragraph {
                    markup,
                    class: *self.stylesheet.list_item(),
                }]
            }
            ContentKind::Normal => {
                if payload.trim().is_empty() {
                    Vec::new()
                } else if is_legal_notice(payload) {
                    vec![Emission::Notice {
                        markup: format_markup(payload),
                        class: *self.stylesheet.notice(),
                    }]
                } else {
                    vec![paragraph_emission(payload, self.stylesheet.normal())]
                }
            }
        }
    }

    fn notice_box(&self, markup: &str, class: &TextClass) -> PaddedElement<NoticeBox> {
        NoticeBox::new(parse_spans(markup))
            .with_style(class.text_style())
            .with_padding(mm_from_pt(self.stylesheet.notice_padding_pt()))
            .with_leading(mm_from_pt(class.line_leading_pt()))
            .with_background(self.stylesheet.notice_background())
            .padded(class_margins(class))
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn paragraph_emission(payload: &str, class: &TextClass) -> Emission {
    Emission::Paragraph {
        markup: format_markup(payload),
        class: *class,
    }
}

fn markup_paragraph(markup: &str, class: &TextClass) -> PaddedElement<Paragraph> {
    let style = class.text_style();
    let mut paragraph = Paragraph::default();
    for span in parse_spans(markup) {
        paragraph.push_styled(span.text().to_owned(), style.and(span.to_style()));
    }
    paragraph.set_alignment(class.alignment().to_alignment());
    paragraph.padded(class_margins(class))
}

fn class_margins(class: &TextClass) -> Margins {
    Margins::trbl(
        mm_from_pt(class.space_before_pt()),
        0,
        mm_from_pt(class.space_after_pt()),
        mm_from_pt(class.indent_pt()),
    )
}

#[cfg(test)]
mod tests {
    use super::{is_legal_notice, DocumentRenderer, Emission};
    use crate::classifier::classify;
    use crate::model::ContentItem;
    use crate::styles::Stylesheet;

    fn renderer() -> DocumentRenderer {
        DocumentRenderer::new()
    }

    #[test]
    fn notice_detection_matches_the_two_trigger_phrases() {
        assert!(is_legal_notice(
            "NOTICE: BY CLICKING \"I AGREE\" YOU ACCEPT THESE TERMS."
        ));
        assert!(is_legal_notice("This is a conspicuous notice to all users."));
        assert!(is_legal_notice("THIS CONSPICUOUS NOTICE BINDS YOU."));

        // The click-through phrase is matched case-sensitively.
        assert!(!is_legal_notice("notice: by clicking you agree"));
        assert!(!is_legal_notice("Just an ordinary paragraph."));
    }

    #[test]
    fn spacer_plans_a_small_gap() {
        let plan = renderer().plan(&[ContentItem::spacer()]);
        assert_eq!(plan, vec![Emission::Gap(Stylesheet::SPACER_GAP_PT)]);
    }

    #[test]
    fn only_the_first_title_gets_the_followup_gap() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[
            ContentItem::title("First"),
            ContentItem::title("Second"),
        ]);
        assert_eq!(
            plan,
            vec![
                Emission::Paragraph {
                    markup: "First".into(),
                    class: *sheet.title(),
                },
                Emission::Gap(Stylesheet::TITLE_FOLLOWUP_GAP_PT),
                Emission::Paragraph {
                    markup: "Second".into(),
                    class: *sheet.title(),
                },
            ]
        );
    }

    #[test]
    fn headings_are_preceded_by_their_gap() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::section("1. Scope")]);
        assert_eq!(
            plan,
            vec![
                Emission::Gap(Stylesheet::SECTION_LEAD_GAP_PT),
                Emission::Paragraph {
                    markup: "1. Scope".into(),
                    class: *sheet.section(),
                },
            ]
        );

        let plan = renderer().plan(&[ContentItem::subsection("1.1 Definitions")]);
        assert_eq!(plan[0], Emission::Gap(Stylesheet::SUBSECTION_LEAD_GAP_PT));
    }

    #[test]
    fn separator_is_framed_by_gaps_and_set_as_an_underscore_run() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::separator()]);
        assert_eq!(
            plan,
            vec![
                Emission::Gap(Stylesheet::SEPARATOR_FRAME_GAP_PT),
                Emission::Paragraph {
                    markup: "_".repeat(80),
                    class: *sheet.normal(),
                },
                Emission::Gap(Stylesheet::SEPARATOR_FRAME_GAP_PT),
            ]
        );
    }

    #[test]
    fn list_items_carry_the_bullet_prefix() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::list_item("no warranty")]);
        assert_eq!(
            plan,
            vec![Emission::Paragraph {
                markup: "\u{2022} no warranty".into(),
                class: *sheet.list_item(),
            }]
        );
    }

    #[test]
    fn bold_items_drop_every_literal_marker() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::bold("**ALL** terms **apply**")]);
        assert_eq!(
            plan,
            vec![Emission::Paragraph {
                markup: "ALL terms apply".into(),
                class: *sheet.bold(),
            }]
        );
    }

    #[test]
    fn blank_body_text_emits_nothing() {
        assert!(renderer().plan(&[ContentItem::normal("   ")]).is_empty());
    }

    #[test]
    fn body_markup_is_formatted_for_the_paragraph() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::normal("Fees & **charges** apply")]);
        assert_eq!(
            plan,
            vec![Emission::Paragraph {
                markup: "Fees &amp; <b>charges</b> apply".into(),
                class: *sheet.normal(),
            }]
        );
    }

    #[test]
    fn notice_payloads_become_notice_emissions() {
        let sheet = Stylesheet::default();
        let plan = renderer().plan(&[ContentItem::normal(
            "NOTICE: BY CLICKING YOU AGREE & ACCEPT",
        )]);
        assert_eq!(
            plan,
            vec![Emission::Notice {
                markup: "NOTICE: BY CLICKING YOU AGREE &amp; ACCEPT".into(),
                class: *sheet.notice(),
            }]
        );
    }

    #[test]
    fn lowercase_click_phrase_renders_as_a_plain_paragraph() {
        let plan = renderer().plan(&[ContentItem::normal("notice: by clicking here")]);
        assert!(matches!(plan.as_slice(), [Emission::Paragraph { .. }]));
    }

    #[test]
    fn classified_document_plans_in_source_order() {
        let items = classify("# T\n\n## S\n- item\n");
        let plan = renderer().plan(&items);
        let kinds: Vec<&'static str> = plan
            .iter()
            .map(|emission| match emission {
                Emission::Gap(_) => "gap",
                Emission::Paragraph { .. } => "paragraph",
                Emission::Notice { .. } => "notice",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "paragraph", // title
                "gap",       // one-time followup gap
                "gap",       // spacer
                "gap",       // section lead gap
                "paragraph", // section
                "paragraph", // list item
            ]
        );
    }

    // Dictionaries ship separately from the crate, so this only pins the
    // builder to the dictionary type it must accept.
    #[cfg(feature = "hyphenation")]
    #[test]
    fn hyphenator_builder_takes_a_standard_dictionary() {
        fn configure(
            renderer: DocumentRenderer,
            dictionary: hyphenation::Standard,
        ) -> DocumentRenderer {
            renderer.with_hyphenator(dictionary)
        }
        let _ = configure;
    }
}
