use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::{info, warn};

use subtest_lint::cli;
use subtest_lint::discovery;
use subtest_lint::logging::{self, Verbosity};
use subtest_lint::output::OutputFormatter;
use subtest_lint::scanner::{ScanResult, SubtestScanner};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;

    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let files = discovery::discover_test_files(&args.path)
        .with_context(|| format!("Failed to discover test files in {}", args.path.display()))?;
    info!(count = files.len(), "test files to scan");

    let scanner = SubtestScanner::new();
    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        match scanner.scan_file(file) {
            Ok(result) => results.push(result),
            Err(err) => {
                // A broken file must not abort the rest of the run.
                warn!(file = %file.display(), %err, "scan failed");
                let mut result = ScanResult::new(file.display().to_string());
                result.add_error(err.to_string());
                results.push(result);
            }
        }
    }

    let rendered = OutputFormatter::format(&results, args.format)?;
    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
    }

    let total: usize = results.iter().map(ScanResult::diagnostic_count).sum();
    if total > 0 {
        std::process::exit(1);
    }

    Ok(())
}
