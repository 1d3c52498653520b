//! terms2pdf CLI - renders terms-of-service text files to PDF.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;

use terms2pdf::DocumentRenderer;

/// Renders a markdown-like terms-of-service text file into a styled PDF.
///
/// Rendering needs the Helvetica font metrics files under `assets/fonts`
/// next to the binary, or in a directory named by the `TERMS2PDF_FONTS_DIR`
/// environment variable or the `--fonts-dir` option.
#[derive(Parser)]
#[command(
    name = "terms2pdf",
    version,
    about = "Render terms-of-service text files as styled PDF documents"
)]
struct Cli {
    /// Input text file.
    #[arg(value_name = "INPUT", default_value = "terms.txt")]
    input: PathBuf,

    /// Output PDF file.
    #[arg(value_name = "OUTPUT", default_value = "terms.pdf")]
    output: PathBuf,

    /// Directory containing the Helvetica font metrics files.
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,

    /// Title stored in the PDF metadata.
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Suppress progress output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> terms2pdf::Result<()> {
    let progress = |message: &str| {
        if !cli.quiet {
            println!("{message}");
        }
    };

    progress("Reading terms file...");
    let text = terms2pdf::read_source(&cli.input)?;

    progress("Processing content...");
    let items = terms2pdf::classify(&text);
    debug!("classified {} items from {}", items.len(), cli.input.display());

    progress("Generating PDF...");
    let mut renderer = DocumentRenderer::new();
    if let Some(fonts_dir) = &cli.fonts_dir {
        renderer = renderer.with_fonts_dir(fonts_dir);
    }
    if let Some(title) = &cli.title {
        renderer = renderer.with_title(title.clone());
    }
    renderer.render_to_file(&items, &cli.output)?;

    progress(&format!("Done: {}", cli.output.display()));
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
