use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chengyu_index::io_utils::{convert_cli_error, io_cli_error};
use chengyu_index::{build_index, load_idioms};

/// Print how many idioms each Han character appears in.
#[derive(Parser)]
struct Args {
    /// Input JSON file (array of {"word": ...} records)
    input: PathBuf,
    /// Only print summary totals
    #[arg(long)]
    summary: bool,
    /// Print only the N largest buckets
    #[arg(long)]
    top: Option<usize>,
    /// Optional CSV output path for per-character counts
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for per-character counts
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct Row {
    character: char,
    idioms: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let values =
        load_idioms(&args.input).map_err(|e| convert_cli_error("reading idiom list", e))?;
    let (index, skipped) = build_index(&values);

    let mut rows: Vec<Row> = index
        .iter()
        .map(|(c, words)| Row {
            character: c,
            idioms: words.len(),
        })
        .collect();
    if let Some(n) = args.top {
        rows.sort_by(|a, b| b.idioms.cmp(&a.idioms));
        rows.truncate(n);
    }

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        wtr.write_record(["character", "idioms"])?;
        for row in &rows {
            wtr.write_record([row.character.to_string(), row.idioms.to_string()])?;
        }
        wtr.flush()?;
    }
    if let Some(path) = &args.json {
        let mut f = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        serde_json::to_writer_pretty(&mut f, &rows)?;
        f.write_all(b"\n")?;
    }

    if !args.summary {
        for row in &rows {
            println!("{}: {}", row.character, row.idioms);
        }
    }

    let largest = index.iter().map(|(_, words)| words.len()).max().unwrap_or(0);
    println!("#records: {}", values.len());
    println!("#skipped: {skipped}");
    println!("#characters: {}", index.len());
    println!("#largest bucket: {largest}");

    Ok(())
}
