#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use typed_builder::TypedBuilder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Severity of a style violation reported by the checker.
pub enum Severity {
    /// Violation raised as an error.
    Error,
    /// Violation raised as a warning.
    Warning,
}

impl Severity {
    /// Canonical uppercase tag used in rendered diagnostics.
    fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }

    /// Indicates whether the severity represents an error.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "ERROR" => Ok(Severity::Error),
            "WARNING" => Ok(Severity::Warning),
            other => Err(de::Error::custom(format!("Unknown severity: {other}"))),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// A struct representing one style violation reported for a file
pub struct StyleDiagnostic {
    /// Type of diagnostic (error or warning).
    severity: Severity,
    /// * `message`: the violation text, already stripped of its path prefix
    message:  String,
}

impl StyleDiagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }
}

impl Display for StyleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Pass/fail marker for one checked file.
pub enum CheckStatus {
    /// No diagnostics were reported.
    Successful,
    /// At least one diagnostic was reported.
    Failed,
}

impl CheckStatus {
    /// Canonical uppercase form used in status lines.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Successful => "SUCCESSFUL",
            CheckStatus::Failed => "FAILED",
        }
    }

    /// Colorized status marker for terminal output.
    pub fn label(self) -> ColoredString {
        match self {
            CheckStatus::Successful => self.as_str().green(),
            CheckStatus::Failed => self.as_str().red(),
        }
    }
}

impl Serialize for CheckStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CheckStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "SUCCESSFUL" => Ok(CheckStatus::Successful),
            "FAILED" => Ok(CheckStatus::Failed),
            other => Err(de::Error::custom(format!("Unknown check status: {other}"))),
        }
    }
}

impl Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// One file's check outcome: its name and every reported diagnostic.
pub struct FileResult {
    /// name of the checked file.
    file_name:   String,
    /// diagnostics reported for it, in emitted order.
    diagnostics: Vec<StyleDiagnostic>,
}

impl FileResult {
    /// Pairs a file name with its reported diagnostics.
    pub fn new(file_name: impl Into<String>, diagnostics: Vec<StyleDiagnostic>) -> Self {
        Self {
            file_name: file_name.into(),
            diagnostics,
        }
    }

    /// Name of the checked file.
    pub fn file_name(&self) -> &str {
        self.file_name.as_ref()
    }

    /// Diagnostics reported for the file, in emitted order.
    pub fn diagnostics(&self) -> &[StyleDiagnostic] {
        &self.diagnostics
    }

    /// True when no diagnostics were reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Pass/fail marker: successful exactly when clean.
    pub fn status(&self) -> CheckStatus {
        if self.is_clean() {
            CheckStatus::Successful
        } else {
            CheckStatus::Failed
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// Aggregate counters across one batch of checked files.
pub struct BatchSummary {
    /// files checked so far.
    files:      usize,
    /// files that produced no diagnostics.
    successful: usize,
    /// files that produced at least one diagnostic.
    failed:     usize,
    /// total diagnostics across all files.
    errors:     usize,
}

impl BatchSummary {
    /// Folds one file's diagnostic count into the counters.
    ///
    /// A file counts as successful exactly when `diagnostics` is zero, so
    /// `files == successful + failed` holds after every call.
    pub fn record(&mut self, diagnostics: usize) {
        self.files += 1;
        if diagnostics == 0 {
            self.successful += 1;
        } else {
            self.failed += 1;
            self.errors += diagnostics;
        }
    }

    /// Number of files checked so far.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Number of files that produced no diagnostics.
    pub fn successful(&self) -> usize {
        self.successful
    }

    /// Number of files that produced at least one diagnostic.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Total diagnostics across all files.
    pub fn errors(&self) -> usize {
        self.errors
    }
}
