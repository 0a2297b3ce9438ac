// src/models/analysis_summary.rs

use std::path::PathBuf;

/// What a successful analyzer run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub report_path: PathBuf,
    pub unique_words: usize,
    pub total_occurrences: u64,
    pub top_words: Vec<String>,
}
