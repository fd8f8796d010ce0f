// src/extractors/segment.rs
use crate::extractors::anchor::{find_earliest, find_first_listed};

/// Appended to a preview that had to be cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Paragraph boundary used when no end marker follows the section.
const BLANK_LINE: &str = "\n\n";

/// Returns the text between a start marker and the nearest following end marker.
///
/// The start marker is the first entry of `start_markers` that occurs at all
/// (list priority). The end boundary is the earliest occurrence of any entry
/// of `end_markers` after the start marker (position priority). Without an end
/// marker the section runs to the next blank line, or is cut to a preview of
/// `preview_limit` characters.
///
/// Returns `None` only when no start marker occurs.
pub fn extract_between(
    text: &str,
    start_markers: &[&str],
    end_markers: &[&str],
    preview_limit: usize,
) -> Option<String> {
    let start = find_first_listed(text, start_markers)?;
    let content_start = start.end();
    tracing::trace!("Section opened by '{}' at offset {}", start.marker, start.offset);

    match find_earliest(text, end_markers, content_start) {
        Some(end) => {
            tracing::trace!("Section closed by '{}' at offset {}", end.marker, end.offset);
            Some(text[content_start..end.offset].trim().to_string())
        }
        None => {
            tracing::trace!("No end marker after offset {}, using remainder", content_start);
            Some(extract_remaining(&text[content_start..], preview_limit))
        }
    }
}

/// Cuts an unterminated section at the first blank line, or to a bounded preview.
fn extract_remaining(remaining: &str, preview_limit: usize) -> String {
    if let Some(boundary) = remaining.find(BLANK_LINE) {
        return remaining[..boundary].trim().to_string();
    }

    // Character-based limit so multi-byte text is never split mid-character
    match remaining.char_indices().nth(preview_limit) {
        Some((cut, _)) => format!("{}{}", remaining[..cut].trim(), TRUNCATION_MARKER),
        None => remaining.trim().to_string(),
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::anchor::{FEEDBACK_MARKERS, SCORE_MARKERS, SUMMARY_MARKERS};

    const LIMIT: usize = 200;

    #[test]
    fn test_content_between_markers_is_trimmed() {
        let text = "Summary:   Nice essay. \n\nFeedback: fix commas";
        let summary = extract_between(text, SUMMARY_MARKERS, FEEDBACK_MARKERS, LIMIT);
        assert_eq!(summary.as_deref(), Some("Nice essay."));
    }

    #[test]
    fn test_missing_start_marker_returns_none() {
        let text = "There is no section label in here.";
        assert!(extract_between(text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT).is_none());
    }

    #[test]
    fn test_end_marker_is_nearest_by_position() {
        // "Rating:" is listed last but appears before "Score:"
        let text = "Feedback: good flow Rating: 4/5 Score: 80";
        let feedback = extract_between(text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT);
        assert_eq!(feedback.as_deref(), Some("good flow"));
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let text = "Score: 50\nFeedback: keep going\n\ntrailing";
        let feedback = extract_between(text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT);
        assert_eq!(feedback.as_deref(), Some("keep going"), "end search starts after the start marker");
    }

    #[test]
    fn test_start_marker_uses_list_priority() {
        // "feedback:" appears first in the text but "Feedback:" is listed first
        let text = "feedback: early\n\nFeedback: chosen\n\n";
        let feedback = extract_between(text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT);
        assert_eq!(feedback.as_deref(), Some("chosen"));
    }

    #[test]
    fn test_unterminated_section_stops_at_blank_line() {
        let text = "Feedback: first paragraph\nstill first\n\nsecond paragraph";
        let feedback = extract_between(text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT);
        assert_eq!(feedback.as_deref(), Some("first paragraph\nstill first"));
    }

    #[test]
    fn test_long_unterminated_section_is_truncated() {
        let body = "x".repeat(250);
        let text = format!("Feedback:{}", body);
        let feedback = extract_between(&text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT).unwrap();
        assert_eq!(feedback, format!("{}{}", "x".repeat(200), TRUNCATION_MARKER));
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let text = format!("Feedback:{}", "y".repeat(200));
        let feedback = extract_between(&text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT).unwrap();
        assert_eq!(feedback.len(), 200);
        assert!(!feedback.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = format!("Feedback:{}", "é".repeat(201));
        let feedback = extract_between(&text, FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT).unwrap();
        assert_eq!(feedback.chars().count(), 200 + TRUNCATION_MARKER.len());
    }

    #[test]
    fn test_marker_at_end_of_text_yields_empty_section() {
        let feedback = extract_between("Feedback:", FEEDBACK_MARKERS, SCORE_MARKERS, LIMIT);
        assert_eq!(feedback.as_deref(), Some(""));
    }
}
