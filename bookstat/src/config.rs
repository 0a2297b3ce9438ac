// src/config.rs
pub mod loader;

pub use loader::{find_config_file, load_config, load_config_file};

use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "bookstat.toml";
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_EXTENSION: &str = ".txt";
pub const DEFAULT_TOP: usize = 10;
pub const REPORT_SUFFIX: &str = "_statistic.txt";

/// Resolved settings for one analyzer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that holds the books.
    pub source_dir: PathBuf,
    /// Appended to the title to form the book file name, e.g. `.txt`.
    pub extension: String,
    /// Directory the statistics file is written to.
    pub output_dir: PathBuf,
    /// How many of the most frequent words are printed.
    pub top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extension: String::from(DEFAULT_EXTENSION),
            output_dir: PathBuf::from("."),
            top: DEFAULT_TOP,
        }
    }
}

/// Contents of a `bookstat.toml` file. Every key is optional and only
/// overrides the default it names.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub top: Option<usize>,
}

impl Config {
    /// Applies the keys present in `file` on top of the current values.
    #[must_use]
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(source_dir) = file.source_dir {
            self.source_dir = source_dir;
        }
        if let Some(extension) = file.extension {
            self.extension = extension;
        }
        if let Some(output_dir) = file.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(top) = file.top {
            self.top = top;
        }
        self
    }

    /// Path of the book named `title`. The title is used as-is, separators included.
    #[must_use]
    pub fn book_path(&self, title: &str) -> PathBuf {
        self.source_dir.join(format!("{title}{}", self.extension))
    }

    /// Path of the statistics file written for `title`.
    #[must_use]
    pub fn report_path(&self, title: &str) -> PathBuf {
        self.output_dir.join(report_file_name(title))
    }
}

#[must_use]
pub fn report_file_name(title: &str) -> String {
    format!("{title}{REPORT_SUFFIX}")
}
