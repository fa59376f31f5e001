use std::fs;
use std::path::PathBuf;

use clap::Parser;
use oriflamms_align::{AlignerConfig, ImageSignatureSymbol, SignatureAlignerBuilder, UnitGranularity};
use serde::Deserialize;

#[path = "align_line/json_output.rs"]
mod json_output;

#[derive(Debug, Parser)]
#[command(name = "align_line")]
#[command(about = "Align one transcribed line with its image signature")]
struct Args {
    /// JSON object mapping characters to signature strings.
    #[arg(long, env = "ORIFLAMMS_SIGNATURE_TABLE")]
    signature_table: PathBuf,
    /// JSON case file with `image_signature` and `text`.
    #[arg(long = "case")]
    case_file: PathBuf,
    #[arg(long, value_enum, default_value_t = UnitGranularity::Word)]
    granularity: UnitGranularity,
    /// Do not append the space signature between words.
    #[arg(long, default_value_t = false)]
    no_word_separator: bool,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct LineCase {
    image_signature: Vec<ImageSignatureSymbol>,
    text: String,
}

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let data = fs::read_to_string(&args.case_file).map_err(|err| {
        format!(
            "Failed to read case file '{}': {err}",
            args.case_file.display()
        )
    })?;
    let case: LineCase = serde_json::from_str(&data).map_err(|err| {
        format!(
            "Failed to parse case file '{}': {err}",
            args.case_file.display()
        )
    })?;

    let config = AlignerConfig {
        signature_table_path: args.signature_table.to_string_lossy().to_string(),
        granularity: args.granularity,
        word_separator: if args.no_word_separator {
            None
        } else {
            Some(AlignerConfig::DEFAULT_WORD_SEPARATOR)
        },
    };
    let aligner = SignatureAlignerBuilder::new(config)
        .build()
        .map_err(|err| format!("Failed to build aligner: {err}"))?;

    let units = aligner
        .align_text(&case.image_signature, &case.text)
        .map_err(|err| format!("Alignment failed: {err}"))?;
    if units.iter().any(|u| u.segment.is_none()) {
        eprintln!(
            "{} of {} {} units could not be aligned",
            units.iter().filter(|u| u.segment.is_none()).count(),
            units.len(),
            args.granularity.as_str()
        );
    }

    json_output::write_units(args.out.as_deref(), &units)
}
