#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    StyleError,
    results::{Severity, StyleDiagnostic},
};
use crate::constants::SOURCE_EXTENSION;

/// Audit start marker always emitted by the checker.
const STARTING_AUDIT: &str = "Starting audit...";
/// Audit end marker always emitted by the checker.
const AUDIT_DONE: &str = "Audit done.";
/// Noise category: missing type-level documentation.
const MISSING_JAVADOC_TYPE: &str = "[MissingJavadocType]";
/// Noise category: missing method-level documentation.
const MISSING_JAVADOC_METHOD: &str = "[MissingJavadocMethod]";

/// Parses one invocation's captured output into ordered diagnostics.
///
/// The audit start/end markers and the two missing-javadoc noise categories
/// are dropped by substring match, however many times they occur. Every
/// surviving line is stripped of its path prefix and tagged at error
/// severity. Order is source line order; nothing is deduplicated or sorted.
///
/// A blank capture is an [`StyleError::EmptyCapture`] rather than "zero
/// diagnostics": the checker always emits at least its audit markers, so
/// nothing at all means its contract was violated.
pub fn parse(capture: &str) -> Result<Vec<StyleDiagnostic>, StyleError> {
    let capture = capture.trim();
    if capture.is_empty() {
        return Err(StyleError::EmptyCapture);
    }

    let marker = format!(".{SOURCE_EXTENSION}");

    Ok(capture
        .lines()
        .filter(|line| !line.contains(STARTING_AUDIT))
        .filter(|line| !line.contains(AUDIT_DONE))
        .filter(|line| !line.contains(MISSING_JAVADOC_TYPE))
        .filter(|line| !line.contains(MISSING_JAVADOC_METHOD))
        .map(|line| {
            StyleDiagnostic::builder()
                .severity(Severity::Error)
                .message(strip_path_prefix(line, &marker))
                .build()
        })
        .collect())
}

/// Drops everything up to and including the last `marker` occurrence plus
/// the separator character that follows it.
///
/// The last occurrence is treated as a path boundary even when it is not
/// one (a directory literally named with the extension, say); no smarter
/// path parsing is attempted. A line without the marker is kept whole, and
/// a line ending right at the marker yields an empty message.
fn strip_path_prefix(line: &str, marker: &str) -> String {
    match line.rfind(marker) {
        Some(index) => line
            .get(index + marker.len() + 1..)
            .unwrap_or_default()
            .to_string(),
        None => line.to_string(),
    }
}
