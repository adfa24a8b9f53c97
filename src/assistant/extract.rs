//! Locate a JSON candidate inside a free-text model reply.

use once_cell::sync::Lazy;
use regex::Regex;

/// Greedy: first `{` through the last `}`, spanning newlines.
static JSON_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid JSON span regex"));

/// Return the span from the first `{` to the last `}` in `reply`.
///
/// No balancing is attempted. A reply holding two separate objects yields a
/// span covering both plus the prose between them, which will not parse.
pub fn extract_json_candidate(reply: &str) -> Option<&str> {
    JSON_SPAN.find(reply).map(|m| m.as_str())
}
