//! Version range extraction from host artifact coordinates
//!
//! A coordinate such as `system:cdap-data-pipeline[6.1.1,7.0.0-SNAPSHOT)` carries
//! its compatible range as a bracketed suffix. This is a scan, not a parser: the
//! range is carried through to the spec untouched and validated by the hub.

use tracing::debug;

const OPENING: [char; 2] = ['[', '('];
const CLOSING: [char; 2] = [']', ')'];

/// Extract the bracketed version range from `coordinate`
///
/// `[` is preferred over `(` for the opening delimiter and `]` over `)` for the
/// closing one, which is searched from the opening position on. Returns an empty
/// string when either delimiter is missing. Bracket matching is not checked, so a
/// stray `[` before the real range yields the wrong span.
pub fn extract_range(coordinate: &str) -> &str {
    let Some(start) = OPENING.iter().find_map(|c| coordinate.find(*c)) else {
        return "";
    };

    let tail = &coordinate[start..];
    let Some(end) = CLOSING.iter().find_map(|c| tail.find(*c)) else {
        return "";
    };

    if coordinate.chars().filter(|c| OPENING.contains(c)).count() > 1 {
        debug!(
            "Coordinate '{}' holds more than one opening bracket, using the first range",
            coordinate
        );
    }

    // Delimiters are single-byte, so `end + 1` stays on a char boundary.
    &tail[..=end]
}
