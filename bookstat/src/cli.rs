// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use log::{LevelFilter, debug};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{Config, load_config};
use crate::core::input::read_title;
use crate::core::pipeline::analyze_book;

pub const TITLE_PROMPT: &str = "Enter the title of the book to analyze: ";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Title of the book to analyze (read from stdin when omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory holding the books (defaults to "src")
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Directory the statistics file is written to (defaults to current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of most frequent words to print (defaults to 10)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Configuration file to use instead of searching for bookstat.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Effective verbosity: 0 quiet, 1 default, 2 verbose, 3+ debug.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Layers defaults, the configuration file and command-line overrides.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * The configuration file cannot be read or parsed
pub fn resolve_config(args: &Args) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let mut config = load_config(args.config.as_deref(), &cwd)?;

    if let Some(source_dir) = &args.source_dir {
        config.source_dir.clone_from(source_dir);
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir.clone_from(output_dir);
    }
    if let Some(top) = args.top {
        config.top = top;
    }

    debug!("Effective configuration: {config:?}");
    Ok(config)
}

/// Prints [`TITLE_PROMPT`] to `output`, flushes it and reads one title line
/// from `input`.
///
/// # Errors
///
/// This function may return an error if:
/// * The prompt cannot be written or flushed
/// * `input` fails or ends before a line is read
pub fn prompt_title<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    writeln!(output, "{TITLE_PROMPT}")?;
    output.flush()?;

    Ok(read_title(input)?)
}

/// Runs one analysis and prints the summary to stdout.
///
/// # Errors
///
/// Returns the failure of whichever stage stopped the run. Pipeline failures
/// are [`crate::AnalyzerError`] values whose message is the user-facing
/// diagnostic.
pub fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;

    let title = match args.title {
        Some(title) => title,
        None => prompt_title(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let mut stdout = io::stdout().lock();
    analyze_book(&config, &title, &mut stdout)?;
    Ok(())
}
