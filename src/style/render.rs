#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;

use super::results::{BatchSummary, FileResult};

/// Scoped ANSI rendering: enabled on construction, restored on drop.
///
/// Color state is process-wide in `colored`, so holding the guard only for
/// the duration of one printed region guarantees no failure mid-render
/// leaves the terminal colored.
pub struct ColorScope;

impl ColorScope {
    /// Enables ANSI rendering until the guard is dropped.
    pub fn new() -> Self {
        colored::control::set_override(true);
        ColorScope
    }
}

impl Default for ColorScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ColorScope {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

/// Prints one file's status header and, when it failed, every diagnostic
/// below it.
pub fn render_file(result: &FileResult) {
    let _colors = ColorScope::new();

    println!("{} - {}", result.file_name(), result.status().label());
    for diagnostic in result.diagnostics() {
        println!("{}", diagnostic.to_string().trim().red());
    }
}

/// Prints the aggregate footer for one batch.
pub fn render_batch_footer(summary: &BatchSummary) {
    println!("{}", batch_footer(summary));
}

/// Builds the aggregate footer text: the bar-separated counter line when
/// anything failed, the success banner otherwise. Never both.
pub fn batch_footer(summary: &BatchSummary) -> String {
    if summary.errors() > 0 {
        prepare_footer(summary)
    } else {
        underline("Your source files are verified successfully!")
    }
}

/// Underlines `text` with a dash rule of the same length.
pub fn underline(text: &str) -> String {
    format!("{text}\n{}", "-".repeat(text.len()))
}

/// Joins `segments` with bars and underlines the result with a dash rule
/// sized to its visible length (leading/trailing whitespace ignored).
pub fn ruled_bar(segments: &[String]) -> String {
    let bar = segments.join(" | ");
    format!("{bar}\n{}", "-".repeat(bar.trim().len()))
}

/// Builds the bar-separated footer: `FILES` always, then only the non-zero
/// counters, over a dash rule sized to the bar's visible length.
pub fn prepare_footer(summary: &BatchSummary) -> String {
    let mut segments = vec![format!("\nFILES {}", summary.files())];
    if summary.successful() > 0 {
        segments.push(format!("SUCCESSFUL {}", summary.successful()));
    }
    if summary.failed() > 0 {
        segments.push(format!("FAILED {}", summary.failed()));
    }
    if summary.errors() > 0 {
        segments.push(format!("ERRORS {}", summary.errors()));
    }

    ruled_bar(&segments)
}
