// src/extractors/score.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Highest score a fragment can normalize to.
pub const MAX_SCORE: f64 = 100.0;

// Everything that is not a digit or a decimal point
static NON_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9.]").expect("Failed to compile NON_NUMERIC_RE")
});

/// Parses a loosely formatted score fragment such as `"92%"`, `"**88**"` or `"7.5"`.
///
/// All characters other than digits and `.` are dropped before parsing; a minus
/// sign is kept only when it sits directly in front of the number. Results above
/// [`MAX_SCORE`] are capped, negative results pass through unchanged.
///
/// Returns `None` for fragments without digits or with a malformed number
/// (for example two decimal points).
pub fn parse_score(fragment: &str) -> Option<f64> {
    let digits = NON_NUMERIC_RE.replace_all(fragment, "");
    if digits.is_empty() {
        return None;
    }

    let value: f64 = match digits.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!("Discarding score fragment '{}': {}", fragment, e);
            return None;
        }
    };

    let signed = if is_negative(fragment) { -value } else { value };
    Some(signed.min(MAX_SCORE))
}

/// True when a `-` immediately precedes the first digit or decimal point.
fn is_negative(fragment: &str) -> bool {
    fragment
        .find(|c: char| c.is_ascii_digit() || c == '.')
        .map_or(false, |first| fragment[..first].ends_with('-'))
}
