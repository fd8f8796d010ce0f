// src/utils/marker_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractors::anchor::{find_all, MarkerSet, FEEDBACK_MARKERS, SCORE_MARKERS, SUMMARY_MARKERS};
use crate::utils::error::AppError;

// Marker families highlighted in debug output
const MARKER_KINDS: [(&str, MarkerSet); 3] = [
    ("summary", SUMMARY_MARKERS),
    ("feedback", FEEDBACK_MARKERS),
    ("score", SCORE_MARKERS),
];

/// Returns `text` with every known marker wrapped as `[[kind:marker]]`.
///
/// Overlapping hits (e.g. `Score:` inside `3. Score:`) keep only the earliest.
pub fn annotate_markers(text: &str) -> String {
    let mut highlights: Vec<(usize, usize, &str)> = Vec::new();
    for (kind, markers) in MARKER_KINDS {
        for anchor in find_all(text, markers) {
            highlights.push((anchor.offset, anchor.end(), kind));
        }
    }
    highlights.sort_by_key(|h| h.0); // Sort by position

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;

    for (start, end, kind) in highlights {
        if start < last_pos {
            tracing::trace!("Skipping overlapping {} marker at {}", kind, start);
            continue;
        }

        // Add content before the highlight
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}:{}]]", kind, &text[start..end]));
        last_pos = end;
    }

    // Add any remaining content
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Writes the marker-annotated copy of `text` to `filename`.
pub fn save_marker_debug(text: &str, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;
    file.write_all(annotate_markers(text).as_bytes())?;

    tracing::info!("Saved marker debug file to {}", filename.display());
    Ok(())
}
