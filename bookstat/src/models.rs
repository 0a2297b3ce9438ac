// src/models.rs
mod analysis_summary;
mod word_frequencies;

pub use analysis_summary::AnalysisSummary;
pub use word_frequencies::WordFrequencyMap;
