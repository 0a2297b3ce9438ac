// src/core/input.rs
use crate::config::Config;
use crate::error::{AnalyzerError, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Returns `true` only when `path` exists and is a regular file.
///
/// Directories, missing paths and anything whose metadata cannot be read
/// are all rejected.
#[must_use]
pub fn is_valid_book(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
}

/// Maps a book title onto its file inside the configured source directory.
///
/// # Errors
///
/// Returns [`AnalyzerError::MissingBook`] when the resolved path is not a
/// regular file.
pub fn resolve_book(config: &Config, title: &str) -> Result<PathBuf> {
    let path = config.book_path(title);
    debug!("Resolved book '{title}' to {}", path.display());

    if !is_valid_book(&path) {
        info!("{} does not exist or is not a regular file", path.display());
        // Rebuilt from components so `books/` is reported as `books`.
        return Err(AnalyzerError::MissingBook {
            title: title.to_owned(),
            dir: config.source_dir.components().collect(),
        });
    }

    Ok(path)
}

/// Reads the whole book into memory.
///
/// Malformed UTF-8 is replaced with U+FFFD instead of failing the run; the
/// replacement characters are stripped later like any other non-letter.
///
/// # Errors
///
/// Returns [`AnalyzerError::InputIo`] if the file cannot be opened or read.
pub fn read_book(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| AnalyzerError::InputIo {
        path: path.to_path_buf(),
        source,
    })?;

    read_text(BufReader::new(file), path)
}

/// Drains `reader` into a string, decoding it the same way as [`read_book`].
///
/// `path` is only used to label a failure.
///
/// # Errors
///
/// Returns [`AnalyzerError::InputIo`] if the reader fails part way.
pub fn read_text<R: Read>(mut reader: R, path: &Path) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| AnalyzerError::InputIo {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a single line holding the book title.
///
/// Only the line terminator is removed; surrounding spaces and path
/// separators are kept as typed.
///
/// # Errors
///
/// * [`AnalyzerError::NoTitle`] if the input ends before any line is read
/// * [`AnalyzerError::TitleInput`] if reading fails
pub fn read_title<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|source| AnalyzerError::TitleInput { source })?;

    if read == 0 {
        return Err(AnalyzerError::NoTitle);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
