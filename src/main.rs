use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use logtally::{LogAggregator, SourceError};

#[derive(Parser)]
#[command(name = "logtally")]
#[command(about = "Summarize JSON-formatted API request logs")]
#[command(version)]
struct Args {
    /// Log file with one JSON request record per line
    #[arg(value_name = "LOGFILE")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let path = &args.log_file;

    // Directories and other non-file paths are rejected up front; a missing
    // path surfaces through File::open below.
    if path.exists() && !path.is_file() {
        return Err(SourceError::NotAFile(path.display().to_string()).into());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let mut aggregator = LogAggregator::new();
    let stderr = io::stderr();
    aggregator.process_stream(BufReader::new(file), &mut stderr.lock())?;

    let report = aggregator.finalize();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    Ok(())
}
