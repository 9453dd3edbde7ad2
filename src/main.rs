use clap::Parser;
use std::path::PathBuf;

use chengyu_index::convert_file;
use chengyu_index::io_utils::convert_cli_error;

/// Convert a JSON idiom list into a character-indexed JavaScript dictionary.
#[derive(Parser)]
struct Args {
    /// Input JSON file (array of {"word": ...} records)
    #[arg(default_value = "idiom.json")]
    input: PathBuf,
    /// Output JavaScript file
    #[arg(default_value = "idiom.js")]
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    eprintln!("Converting '{}'", args.input.display());
    let summary = convert_file(&args.input, &args.output)
        .map_err(|e| convert_cli_error("conversion failed", e))?;
    eprintln!(
        "Read {} records ({} malformed, skipped)",
        summary.records, summary.skipped
    );
    eprintln!("Indexed {} distinct characters", summary.chars);
    eprintln!("Wrote '{}'", args.output.display());
    Ok(())
}
