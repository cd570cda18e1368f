//! vocload: Pascal VOC annotation loader.
//!
//! vocload parses a directory of Pascal VOC XML files into a flat list of
//! image instances with their bounding boxes, counts label occurrences, and
//! can cache the parsed result so later runs skip parsing.
//!
//! # Modules
//!
//! - [`voc`]: Annotation records, the XML reader, directory loading and cache
//! - [`report`]: Summary and label histogram for a parsed dataset
//! - [`error`]: Error types for vocload operations

pub mod error;
pub mod report;
pub mod voc;

use std::path::PathBuf;

use clap::Parser;

pub use error::VocLoadError;

/// The vocload CLI application.
#[derive(Parser)]
#[command(name = "vocload")]
#[command(version, about)]
struct Cli {
    /// Directory containing one VOC XML file per image (or per batch).
    annotations: PathBuf,

    /// Directory prefixed onto every <filename>.
    #[arg(long)]
    images: PathBuf,

    /// Cache file. Read if it exists, otherwise written after parsing.
    ///
    /// The cache is not invalidated when the annotations, image directory
    /// or labels change; delete it or pick a new path when they do.
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Keep only objects with this label (repeatable). Default keeps all.
    #[arg(long = "label", value_name = "NAME")]
    labels: Vec<String>,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Number of labels listed in the histogram.
    #[arg(long, default_value_t = report::DEFAULT_TOP_LABELS)]
    top: usize,
}

/// Run the vocload CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), VocLoadError> {
    let cli = Cli::parse();

    if !matches!(cli.output.as_str(), "text" | "json") {
        return Err(VocLoadError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            cli.output
        )));
    }

    let labels: voc::LabelFilter = cli.labels.into_iter().collect();
    let dataset = voc::parse_annotation_directory(
        &cli.annotations,
        &cli.images,
        cli.cache.as_deref(),
        &labels,
    )?;

    let report = report::DatasetReport::from_dataset(&dataset, cli.top);
    match cli.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
            println!("{json}");
        }
        _ => print!("{report}"),
    }

    Ok(())
}
