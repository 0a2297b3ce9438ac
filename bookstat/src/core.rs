// src/core.rs
pub mod input;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod tokenizer;
