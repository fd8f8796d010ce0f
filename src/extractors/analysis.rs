// src/extractors/analysis.rs

// --- Imports ---
use serde::{Deserialize, Serialize};

use crate::config::ExtractorConfig;
use crate::extractors::anchor::{FEEDBACK_MARKERS, SCORE_MARKERS, SUMMARY_MARKERS};
use crate::extractors::score::parse_score;
use crate::extractors::segment::extract_between;

// --- Constants ---
pub const SUMMARY_NOT_FOUND: &str = "Summary not found";
pub const FEEDBACK_NOT_FOUND: &str = "Feedback not found";

// Line-scan fallback: a line containing any of these opens the feedback block...
const FEEDBACK_CUES: &[&str] = &["feedback", "grammar", "proficiency"];
// ...and a line containing any of these closes it
const SCORE_CUES: &[&str] = &["score", "%"];

// Texts shorter than this are not worth a line scan
const MIN_LINES_FOR_SCAN: usize = 3;

// Separates the critique from the corrected text inside a feedback block
const REVISION_SEPARATOR: char = ';';

// --- Data Structures ---
/// The three fields recovered from one model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub summary: String,
    pub feedback: String,
    pub score: f64,
}

/// A feedback block split into the critique and the model's corrected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackParts<'a> {
    pub critique: &'a str,
    pub corrected: Option<&'a str>,
}

impl ExtractionResult {
    /// Splits the feedback at the first `;` into critique and corrected text.
    pub fn feedback_parts(&self) -> FeedbackParts<'_> {
        match self.feedback.split_once(REVISION_SEPARATOR) {
            Some((critique, corrected)) => {
                let corrected = corrected.trim();
                FeedbackParts {
                    critique: critique.trim(),
                    corrected: (!corrected.is_empty()).then_some(corrected),
                }
            }
            None => FeedbackParts {
                critique: self.feedback.trim(),
                corrected: None,
            },
        }
    }
}

// --- Main Extractor Structure ---
/// Recovers summary, feedback and score from unstructured model output.
///
/// Each field is extracted independently: keyword-anchored segmentation first,
/// then a field-specific fallback, then a fixed sentinel. Extraction never fails.
#[derive(Debug, Clone, Default)]
pub struct AnalysisExtractor {
    config: ExtractorConfig,
}

impl AnalysisExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Runs all three field extractions over `analysis`.
    pub fn extract(&self, analysis: &str) -> ExtractionResult {
        tracing::debug!("Extracting fields from analysis text ({} bytes)", analysis.len());

        let result = ExtractionResult {
            summary: self.extract_summary(analysis),
            feedback: self.extract_feedback(analysis),
            score: self.extract_score(analysis),
        };

        tracing::info!(
            "Extracted summary ({} chars), feedback ({} chars), score {}",
            result.summary.chars().count(),
            result.feedback.chars().count(),
            result.score
        );
        result
    }

    pub fn extract_summary(&self, analysis: &str) -> String {
        if let Some(summary) =
            extract_between(analysis, SUMMARY_MARKERS, FEEDBACK_MARKERS, self.config.preview_limit)
        {
            return summary;
        }

        tracing::debug!("No summary marker, falling back to first line");
        match analysis.lines().next() {
            Some(first_line) => first_line.trim().to_string(),
            None => SUMMARY_NOT_FOUND.to_string(),
        }
    }

    pub fn extract_feedback(&self, analysis: &str) -> String {
        if let Some(feedback) =
            extract_between(analysis, FEEDBACK_MARKERS, SCORE_MARKERS, self.config.preview_limit)
        {
            return feedback;
        }

        tracing::debug!("No feedback marker, falling back to line scan");
        feedback_from_lines(analysis).unwrap_or_else(|| FEEDBACK_NOT_FOUND.to_string())
    }

    pub fn extract_score(&self, analysis: &str) -> f64 {
        if let Some(score) = score_from_markers(analysis) {
            return score;
        }

        tracing::debug!("No usable score marker, scanning for percentages");
        if let Some(score) = score_from_percentages(analysis) {
            return score;
        }

        tracing::debug!("No numeric evidence, using default score {}", self.config.default_score);
        self.config.default_score
    }
}

/// Convenience wrapper using the default configuration.
pub fn extract_analysis(analysis: &str) -> ExtractionResult {
    AnalysisExtractor::new().extract(analysis)
}

// --- Fallback Helpers ---

/// Collects lines from the first feedback-like line up to (not including) a score line.
fn feedback_from_lines(analysis: &str) -> Option<String> {
    let lines: Vec<&str> = analysis.lines().collect();
    if lines.len() < MIN_LINES_FOR_SCAN {
        return None;
    }

    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in lines {
        let lower = line.to_lowercase();
        if !in_section {
            if !FEEDBACK_CUES.iter().any(|cue| lower.contains(cue)) {
                continue;
            }
            in_section = true;
        }
        if SCORE_CUES.iter().any(|cue| lower.contains(cue)) {
            break;
        }
        collected.push(line);
    }

    let feedback = collected.join("\n").trim().to_string();
    (!feedback.is_empty()).then_some(feedback)
}

/// Tries each score marker in list order; a marker whose line holds no usable
/// number does not stop the search.
fn score_from_markers(analysis: &str) -> Option<f64> {
    SCORE_MARKERS.iter().find_map(|&marker| {
        let start = analysis.find(marker)?;
        let line = analysis[start + marker.len()..]
            .trim_start()
            .lines()
            .next()
            .unwrap_or("");
        let score = usable(parse_score(line.trim()));
        tracing::trace!("Score marker '{}' line '{}' -> {:?}", marker, line, score);
        score
    })
}

/// First whitespace-separated token containing `%` that parses to a usable score.
fn score_from_percentages(analysis: &str) -> Option<f64> {
    analysis
        .split_whitespace()
        .filter(|token| token.contains('%'))
        .find_map(|token| usable(parse_score(token)))
}

// Negative values count as no evidence, keeping reported scores within 0..=100
fn usable(score: Option<f64>) -> Option<f64> {
    score.filter(|value| *value >= 0.0)
}
