// src/error.rs
//! Failures the analyzer pipeline can report.
//!
//! Every variant renders as the user-facing diagnostic printed by the CLI, so the
//! `Display` text doubles as the console message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The resolved book path is absent or not a regular file.
    #[error("The book '{title}' is missing in the {}/ directory or it is not a file.", .dir.display())]
    MissingBook { title: String, dir: PathBuf },

    /// The book exists but could not be opened or read.
    #[error("Error processing file '{}': {source}", .path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The statistics file could not be created, written or flushed.
    #[error("Error writing to file: {source}")]
    OutputIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The console summary could not be written to standard output.
    #[error("Error writing statistics to the console: {source}")]
    Console {
        #[source]
        source: io::Error,
    },

    #[error("No book title was provided")]
    NoTitle,

    #[error("Failed to read the book title: {source}")]
    TitleInput {
        #[source]
        source: io::Error,
    },

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
