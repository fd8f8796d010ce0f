// src/extractors/anchor.rs

// --- Marker Sets ---
/// An ordered list of literal spellings for one logical section boundary.
pub type MarkerSet = &'static [&'static str];

/// Variants that open the summary section.
pub const SUMMARY_MARKERS: MarkerSet = &["Summary:", "SUMMARY:", "summary:", "1. Summary", "**Summary**"];

/// Variants that open the feedback section (and close the summary).
pub const FEEDBACK_MARKERS: MarkerSet = &["Feedback:", "FEEDBACK:", "feedback:", "2. Feedback", "**Feedback**"];

/// Variants that introduce the proficiency score (and close the feedback).
pub const SCORE_MARKERS: MarkerSet = &[
    "Score:",
    "SCORE:",
    "score:",
    "3. Score",
    "**Score**",
    "Percentage:",
    "Rating:",
];

/// A marker located in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'m> {
    pub offset: usize,
    pub marker: &'m str,
}

impl Anchor<'_> {
    /// Byte offset just past the marker.
    pub fn end(&self) -> usize {
        self.offset + self.marker.len()
    }
}

/// Finds the earliest occurrence, at or after `from`, of any marker in `markers`.
///
/// Every marker is searched; the smallest offset wins. On equal offsets the
/// marker listed first is kept. Returns `None` when nothing matches or when
/// `from` is not a valid position in `text`.
pub fn find_earliest<'m>(text: &str, markers: &[&'m str], from: usize) -> Option<Anchor<'m>> {
    let haystack = text.get(from..)?;

    let mut best: Option<Anchor<'m>> = None;
    for &marker in markers {
        if marker.is_empty() {
            continue;
        }
        if let Some(rel) = haystack.find(marker) {
            let offset = from + rel;
            // Strict comparison keeps the earlier list entry on a tie
            if best.map_or(true, |b| offset < b.offset) {
                best = Some(Anchor { offset, marker });
            }
        }
    }

    if let Some(anchor) = best {
        tracing::trace!("Anchor '{}' found at offset {}", anchor.marker, anchor.offset);
    }
    best
}

/// Returns the first marker *in list order* that occurs anywhere in `text`,
/// anchored at its first occurrence.
pub fn find_first_listed<'m>(text: &str, markers: &[&'m str]) -> Option<Anchor<'m>> {
    markers
        .iter()
        .filter(|m| !m.is_empty())
        .find_map(|&marker| text.find(marker).map(|offset| Anchor { offset, marker }))
}

/// Collects every occurrence of every marker, ordered by offset.
pub fn find_all<'m>(text: &str, markers: &[&'m str]) -> Vec<Anchor<'m>> {
    let mut anchors: Vec<Anchor<'m>> = markers
        .iter()
        .filter(|m| !m.is_empty())
        .flat_map(|&marker| {
            text.match_indices(marker)
                .map(move |(offset, _)| Anchor { offset, marker })
        })
        .collect();
    anchors.sort_by_key(|a| a.offset);
    anchors
}
