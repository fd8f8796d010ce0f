// src/extractors/mod.rs
pub mod anchor;
pub mod segment;
pub mod score;
pub mod analysis;

// Re-export key extraction types for convenience
pub use analysis::{
    extract_analysis,
    AnalysisExtractor,
    ExtractionResult,
    FeedbackParts,
    FEEDBACK_NOT_FOUND,
    SUMMARY_NOT_FOUND,
};
pub use anchor::{Anchor, MarkerSet, FEEDBACK_MARKERS, SCORE_MARKERS, SUMMARY_MARKERS};
pub use score::parse_score;
pub use segment::extract_between;
