//! Error types for the terms2pdf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for terms2pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a document.
///
/// Malformed inline markup is deliberately absent: it degrades the rendered
/// output but never fails the conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text file could not be read.
    #[error("Failed to read input file {path}")]
    Input {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The rendered document could not be written.
    #[error("Failed to write output file {path}")]
    Output {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The font metrics could not be located or loaded.
    #[error("Font setup failed")]
    FontLoad(#[source] genpdf::error::Error),

    /// The composition library rejected the document content.
    #[error("Document composition failed")]
    Compose(#[source] genpdf::error::Error),
}
