// src/report/mod.rs
pub mod envelope;

pub use envelope::ResponseEnvelope;

use crate::extractors::ExtractionResult;

/// Renders the plain-text report stored alongside each extraction.
pub fn render_report(result: &ExtractionResult) -> String {
    let parts = result.feedback_parts();

    let mut report = String::new();
    report.push_str("SUMMARY:\n");
    report.push_str(&result.summary);
    report.push_str("\n\nFEEDBACK:\n");
    report.push_str(parts.critique);

    if let Some(corrected) = parts.corrected {
        report.push_str("\n\nREVISED TEXT:\n");
        report.push_str(corrected);
    }

    report.push_str(&format!("\n\nScore: {}%\n", result.score));
    report
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(feedback: &str) -> ExtractionResult {
        ExtractionResult {
            summary: "A letter to a friend.".to_string(),
            feedback: feedback.to_string(),
            score: 82.5,
        }
    }

    #[test]
    fn test_report_with_revised_text() {
        let report = render_report(&sample("Mind the articles;Dear Sam, I hope you are well."));
        assert_eq!(
            report,
            "SUMMARY:\nA letter to a friend.\n\nFEEDBACK:\nMind the articles\n\n\
             REVISED TEXT:\nDear Sam, I hope you are well.\n\nScore: 82.5%\n"
        );
    }

    #[test]
    fn test_report_without_revised_text() {
        let report = render_report(&sample("Feedback not found"));
        assert!(!report.contains("REVISED TEXT"), "no corrected part, no section: {}", report);
        assert!(report.ends_with("FEEDBACK:\nFeedback not found\n\nScore: 82.5%\n"));
    }

    #[test]
    fn test_whole_scores_render_without_fraction() {
        let mut result = sample("ok");
        result.score = 75.0;
        assert!(render_report(&result).ends_with("Score: 75%\n"));
    }
}
