//! # terms2pdf
//!
//! Renders markdown-like terms-of-service text into styled, paginated PDF
//! documents.
//!
//! The pipeline has two stages: [`classifier::classify`] tags every source
//! line as one of a small set of content kinds (headings, list items,
//! separators, body text), and [`renderer::DocumentRenderer`] turns the
//! tagged sequence into a PDF via `genpdf`, applying a fixed style sheet
//! (see [`styles::Stylesheet`]).  Inline `**bold**` markup inside a line is
//! honored by the rich-text layer in [`richtext`].
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> terms2pdf::Result<()> {
//!     terms2pdf::convert_file("terms.txt", "terms.pdf")
//! }
//! ```
//!
//! Rendering needs Helvetica font metrics files on disk; see the [`fonts`]
//! module for the search order.

pub mod classifier;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod model;
pub mod renderer;
pub mod richtext;
pub mod styles;

pub use classifier::{classify, classify_line};
pub use error::{Error, Result};
pub use model::{ContentItem, ContentKind};
pub use renderer::{is_legal_notice, DocumentRenderer, Emission};
pub use richtext::{format_markup, parse_spans, Span};
pub use styles::{HorizontalAlignment, Stylesheet, TextClass};

use std::fs;
use std::path::Path;

use log::debug;

/// Reads a source text file as UTF-8.
///
/// # Example
///
/// ```no_run
/// let text = terms2pdf::read_source("terms.txt").unwrap();
/// let items = terms2pdf::classify(&text);
/// ```
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_owned(),
        source,
    })
}

/// Converts a source text file into a PDF with the default renderer.
///
/// Equivalent to reading the file, classifying its lines, and rendering the
/// items with [`DocumentRenderer::new`].
///
/// # Example
///
/// ```no_run
/// terms2pdf::convert_file("terms.txt", "terms.pdf").unwrap();
/// ```
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let text = read_source(input)?;
    let items = classify(&text);
    debug!("converting {} items to {}", items.len(), output.as_ref().display());
    DocumentRenderer::new().render_to_file(&items, output)
}
