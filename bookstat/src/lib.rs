// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

pub use crate::cli::{Args, run};
pub use crate::config::Config;
pub use crate::core::input::{is_valid_book, read_book, read_title, resolve_book};
pub use crate::core::pipeline::analyze_book;
pub use crate::core::ranking::top_words;
pub use crate::core::report::{print_summary, write_report, write_statistics};
pub use crate::core::tokenizer::{analyze_text, clean_token};
pub use crate::error::AnalyzerError;
pub use crate::models::{AnalysisSummary, WordFrequencyMap};
