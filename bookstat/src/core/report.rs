// src/core/report.rs
use crate::error::{AnalyzerError, Result};
use crate::models::WordFrequencyMap;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes every word with its count, then the number of distinct words.
///
/// The closing line keeps its historical `Total words` label even though the
/// value is the distinct word count, not the sum of occurrences.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, frequencies: &WordFrequencyMap) -> io::Result<()> {
    for (word, count) in frequencies.iter() {
        writeln!(out, "{word} -> {count}")?;
    }
    writeln!(out, "Total words: {}", frequencies.len())
}

/// Creates (or truncates) the statistics file at `path` and fills it.
///
/// A failure part way through leaves whatever was already written on disk.
///
/// # Errors
///
/// Returns [`AnalyzerError::OutputIo`] if the file cannot be created, written
/// or flushed.
pub fn write_report(path: &Path, frequencies: &WordFrequencyMap) -> Result<()> {
    let output_error = |source: io::Error| {
        info!("Writing {} failed: {source}", path.display());
        AnalyzerError::OutputIo {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    write_statistics(&mut writer, frequencies).map_err(output_error)?;
    writer.flush().map_err(output_error)?;

    debug!("Wrote {} entries to {}", frequencies.len(), path.display());
    Ok(())
}

/// Prints the header, one line per top word and the distinct word total.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn print_summary<W: Write>(
    out: &mut W,
    frequencies: &WordFrequencyMap,
    top_words: &[String],
) -> io::Result<()> {
    writeln!(out, "Statistics:")?;
    for word in top_words {
        if let Some(count) = frequencies.get(word) {
            writeln!(out, "{word} -> {count}")?;
        }
    }
    writeln!(out, "Total unique words: {}", frequencies.len())
}
