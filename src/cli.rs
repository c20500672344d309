use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "subtest-lint")]
#[command(about = "Checks that Go sub-test names passed to t.Run follow snake_case", long_about = None)]
pub struct Args {
    /// Path to a Go test file or a directory to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
