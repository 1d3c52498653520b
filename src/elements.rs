//! Custom element implementations built on top of `genpdf` primitives.
//!
//! The composition library ships neither point-exact vertical gaps (its
//! `Break` counts lines) nor filled boxes, both of which the document design
//! needs.  [`FixedGap`] and [`NoticeBox`] fill those holes; the latter draws
//! its background shade as densely spaced horizontal strokes because the
//! rendering layer only exposes stroked lines.

use genpdf::error::Error;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

use crate::richtext::Span;

const FILL_STROKE_STEP_MM: f64 = 0.3;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Converts a length in points (1/72 in) into millimetres.
pub(crate) fn mm_from_pt(points: f64) -> Mm {
    let mm: printpdf::Mm = printpdf::Pt(points).into();
    Mm::from(mm)
}

/// A vertical gap with an exact height.
///
/// Unlike [`genpdf::elements::Break`], which skips a number of text lines,
/// the gap height is independent of the surrounding font metrics.  A gap
/// taller than the remaining page space is clamped rather than carried over,
/// so it never forces a page break on its own.
pub struct FixedGap {
    height: Mm,
}

impl FixedGap {
    /// Creates a gap with the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }

    /// Creates a gap with the given height in points.
    pub fn from_points(points: f64) -> Self {
        Self::new(mm_from_pt(points))
    }
}

impl Element for FixedGap {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// A block of emphasized text set on a shaded background.
///
/// The element word-wraps its spans to the available width, paints the
/// shade, then prints each wrapped line into its own text section so the
/// configured leading is exact.  A box that does not fit the remaining page
/// space moves to the next page as a whole; only a box taller than that
/// full page splits, continuing on following pages with every fragment
/// shaded and padded on its own.
pub struct NoticeBox {
    spans: Vec<Span>,
    style: Style,
    padding: Mm,
    leading: Option<Mm>,
    background: Option<Color>,
    rendered_lines: usize,
    deferred: bool,
}

impl NoticeBox {
    /// Creates a notice box from the provided spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            style: Style::new(),
            padding: Mm::default(),
            leading: None,
            background: None,
            rendered_lines: 0,
            deferred: false,
        }
    }

    /// Sets the base text style merged over the inherited document style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the padding between the box edge and the text.
    pub fn with_padding(mut self, padding: Mm) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the baseline distance between wrapped lines.
    ///
    /// Without an explicit value the lines are spaced by the font's natural
    /// line height.
    pub fn with_leading(mut self, leading: Mm) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Sets the background shade painted behind the text.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    fn wrap_lines(
        &self,
        context: &genpdf::Context,
        base: Style,
        content_width: Mm,
    ) -> Vec<Vec<StyledString>> {
        let mut lines: Vec<Vec<StyledString>> = Vec::new();
        let mut current: Vec<StyledString> = Vec::new();
        let mut current_width = Mm::default();
        let mut pending_space = false;

        for span in &self.spans {
            let style = base.and(span.to_style());
            for word in span.text().split(' ') {
                if word.is_empty() {
                    // A split artifact from a leading, trailing or doubled
                    // space; it only records that a space was seen.
                    pending_space = true;
                    continue;
                }

                let spaced = pending_space && !current.is_empty();
                let text = if spaced {
                    let mut text = String::with_capacity(word.len() + 1);
                    text.push(' ');
                    text.push_str(word);
                    text
                } else {
                    word.to_owned()
                };
                let mut fragment = StyledString::new(text, style);
                let width = fragment.width(&context.font_cache);

                if !current.is_empty() && current_width + width > content_width {
                    lines.push(std::mem::take(&mut current));
                    if spaced {
                        fragment = StyledString::new(word.to_owned(), style);
                    }
                    current_width = fragment.width(&context.font_cache);
                    current.push(fragment);
                } else {
                    current_width += width;
                    current.push(fragment);
                }

                pending_space = false;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl Element for NoticeBox {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let base = style.and(self.style);
        let leading = self
            .leading
            .unwrap_or_else(|| base.line_height(&context.font_cache));
        let width = area.size().width;
        let content_width = width - self.padding - self.padding;

        let lines = self.wrap_lines(context, base, content_width);
        if self.rendered_lines >= lines.len() {
            return Ok(RenderResult::default());
        }
        let remaining = lines.len() - self.rendered_lines;

        let boxed_height = |count: usize| self.padding + self.padding + leading * (count as f64);

        let mut result = RenderResult::default();
        let count = if boxed_height(remaining) > area.size().height {
            // Move the whole box to the next page once; a box taller than
            // that fresh page is then split line by line so every call
            // makes progress.
            if !self.deferred {
                self.deferred = true;
                result.has_more = true;
                return Ok(result);
            }
            let available = area.size().height - self.padding - self.padding;
            let mut fit = 0;
            while fit < remaining && leading * ((fit + 1) as f64) <= available {
                fit += 1;
            }
            fit.max(1)
        } else {
            remaining
        };

        let fragment = &lines[self.rendered_lines..self.rendered_lines + count];
        let fragment_height = boxed_height(fragment.len());

        if let Some(color) = self.background {
            let stroke = Style::new().with_color(color);
            let height = mm_to_f64(fragment_height);
            let mut y = FILL_STROKE_STEP_MM / 2.0;
            while y < height {
                area.draw_line(
                    vec![
                        Position::new(0, mm_from_f64(y)),
                        Position::new(width, mm_from_f64(y)),
                    ],
                    stroke,
                );
                y += FILL_STROKE_STEP_MM;
            }
        }

        let mut printed = 0;
        for (index, line) in fragment.iter().enumerate() {
            let top = self.padding + leading * (index as f64);
            let position = Position::new(self.padding, top);
            let Some(mut section) = area.text_section(&context.font_cache, position, base) else {
                break;
            };
            for piece in line {
                section.print_str(&piece.s, piece.style)?;
            }
            printed += 1;
        }

        // Zero printed lines means the page cannot hold even one padded
        // line; that line is dropped rather than requested again forever.
        self.rendered_lines += printed.max(1);
        if self.rendered_lines < lines.len() {
            self.deferred = true;
            result.has_more = true;
        }
        result.size = Size::new(width, fragment_height);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{mm_from_pt, mm_to_f64};

    #[test]
    fn one_inch_in_points_converts_to_25_4_mm() {
        let mm = mm_to_f64(mm_from_pt(72.0));
        assert!((mm - 25.4).abs() < 1e-3, "got {mm}");
    }

    #[test]
    fn point_conversion_scales_linearly() {
        let six = mm_to_f64(mm_from_pt(6.0));
        let twelve = mm_to_f64(mm_from_pt(12.0));
        assert!((twelve - 2.0 * six).abs() < 1e-9);
    }
}
