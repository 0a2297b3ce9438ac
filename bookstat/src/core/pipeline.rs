// src/core/pipeline.rs
use crate::config::Config;
use crate::core::input::{read_book, resolve_book};
use crate::core::ranking::top_words;
use crate::core::report::{print_summary, write_report};
use crate::core::tokenizer::analyze_text;
use crate::error::{AnalyzerError, Result};
use crate::models::AnalysisSummary;
use log::{debug, info};
use std::io::Write;

/// Runs the whole analysis for one book.
///
/// The steps are, in order:
/// 1. resolve `title` to a regular file under the source directory
/// 2. read and count its words
/// 3. rank the `config.top` most frequent words
/// 4. write `<title>_statistic.txt` to the output directory, then print the
///    summary to `console`
///
/// The summary is only printed once the statistics file is complete.
///
/// # Errors
///
/// This function may return an error if:
/// * The book is missing or not a regular file (nothing is written)
/// * The book cannot be read (nothing is written)
/// * The statistics file cannot be written (partial content stays on disk)
/// * The summary cannot be written to `console`
pub fn analyze_book<W: Write>(
    config: &Config,
    title: &str,
    console: &mut W,
) -> Result<AnalysisSummary> {
    let book_path = resolve_book(config, title)?;
    let content = read_book(&book_path)?;

    let frequencies = analyze_text(&content);
    info!(
        "Counted {} distinct words in {}",
        frequencies.len(),
        book_path.display()
    );
    debug!("{} words kept in total", frequencies.total_occurrences());

    let top = top_words(&frequencies, config.top);

    let report_path = config.report_path(title);
    write_report(&report_path, &frequencies)?;
    info!("Statistics written to {}", report_path.display());

    print_summary(console, &frequencies, &top)
        .map_err(|source| AnalyzerError::Console { source })?;

    Ok(AnalysisSummary {
        report_path,
        unique_words: frequencies.len(),
        total_occurrences: frequencies.total_occurrences(),
        top_words: top,
    })
}
