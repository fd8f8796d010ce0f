// src/lib.rs
//! Recovers a summary, a feedback block and a proficiency score from the
//! free-form text a language model returns for an essay review.

pub mod config;
pub mod extractors;
pub mod input;
pub mod report;
pub mod storage;
pub mod utils;

pub use config::ExtractorConfig;
pub use extractors::{extract_analysis, AnalysisExtractor, ExtractionResult};
pub use utils::AppError;
