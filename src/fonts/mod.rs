//! Helvetica font resolution for rendered documents.
//!
//! Output documents reference the PDF built-in Helvetica family, but the
//! composition library still needs TrueType files for text measurement.  This
//! module locates a directory holding metrically compatible faces (for
//! example renamed Liberation Sans files) and pairs them with the built-in
//! font so the files never get embedded.  Resolution is fail-fast: when no
//! candidate directory works, the error lists every attempt.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, Builtin, FontData, FontFamily};
use log::warn;

/// Name of the font family referenced by rendered documents.
pub const FONT_FAMILY_NAME: &str = "Helvetica";

/// Environment variable naming the metrics directory.
pub const FONTS_DIR_VAR: &str = "TERMS2PDF_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Helvetica-Regular.ttf",
    "Helvetica-Bold.ttf",
    "Helvetica-Italic.ttf",
    "Helvetica-BoldItalic.ttf",
];

struct Candidate {
    path: PathBuf,
    origin: &'static str,
}

fn font_directory_candidates() -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_VAR) {
        if !path.trim().is_empty() {
            candidates.push(Candidate {
                path: PathBuf::from(path),
                origin: FONTS_DIR_VAR,
            });
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.iter().any(|existing| existing.path == candidate) {
                candidates.push(Candidate {
                    path: candidate,
                    origin: "next to the executable",
                });
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates
        .iter()
        .any(|existing| existing.path == manifest_candidate)
    {
        candidates.push(Candidate {
            path: manifest_candidate,
            origin: "crate manifest directory",
        });
    }

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn rejection_reason(candidate: &Path) -> Option<String> {
    if !candidate.is_dir() {
        return Some(format!("directory missing at {}", candidate.display()));
    }

    let missing = missing_font_files(candidate);
    if missing.is_empty() {
        return None;
    }

    let missing_list = missing
        .iter()
        .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("missing files [{}]", missing_list))
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        match rejection_reason(&candidate.path) {
            None => return Ok(candidate.path),
            Some(reason) => {
                if candidate.origin == FONTS_DIR_VAR {
                    warn!("{} is set but unusable: {}", FONTS_DIR_VAR, reason);
                }
                attempts.push(format!(
                    "{} ({}, {})",
                    candidate.path.display(),
                    candidate.origin,
                    reason
                ));
            }
        }
    }

    Err(Error::new(
        format!(
            "Unable to locate the Helvetica metrics directory. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_VAR
        ),
        io::Error::new(io::ErrorKind::NotFound, "font metrics directory not found"),
    ))
}

/// Loads the Helvetica family from an explicitly chosen directory.
///
/// The directory must contain the four `Helvetica-*.ttf` metrics files; no
/// other locations are tried.
pub fn font_family_from_dir(directory: &Path) -> Result<FontFamily<FontData>, Error> {
    if let Some(reason) = rejection_reason(directory) {
        return Err(Error::new(
            format!(
                "Font metrics directory {} is unusable: {}",
                directory.display(),
                reason
            ),
            io::Error::new(io::ErrorKind::NotFound, "font metrics files not found"),
        ));
    }

    fonts::from_files(directory, FONT_FAMILY_NAME, Some(Builtin::Helvetica)).map_err(|err| {
        Error::new(
            format!(
                "Failed to load the {} font family from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}

/// Resolves the metrics directory and loads the Helvetica family from it.
///
/// The search order is the [`FONTS_DIR_VAR`] environment variable, an
/// `assets/fonts` directory next to the running executable, and finally
/// `assets/fonts` under the crate manifest directory.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;
    font_family_from_dir(&directory)
}

/// Indicates whether the default font resolution would succeed.
///
/// Rendering tests use this to skip cleanly on machines without the metrics
/// files instead of failing.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
