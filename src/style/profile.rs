#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// A named Checkstyle rule configuration.
///
/// The rule files are bundled inside the Checkstyle all-in-one jar, so the
/// config reference is a classpath resource, not a filesystem path. Whether
/// the resource actually resolves is the checker process's problem, not
/// ours.
pub enum StyleProfile {
    /// Google Java Style (`/google_checks.xml`).
    Google,
    /// Sun code conventions (`/sun_checks.xml`).
    Sun,
}

impl StyleProfile {
    /// Configuration reference passed to the checker's `-c` flag.
    pub fn config(self) -> &'static str {
        match self {
            StyleProfile::Google => "/google_checks.xml",
            StyleProfile::Sun => "/sun_checks.xml",
        }
    }

    /// Lowercase name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleProfile::Google => "google",
            StyleProfile::Sun => "sun",
        }
    }
}

impl fmt::Display for StyleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a profile name is not part of the closed set.
#[derive(thiserror::Error, Debug)]
#[error("Unknown style profile `{0}`, expected `google` or `sun`")]
pub struct UnknownProfile(String);

impl FromStr for StyleProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(StyleProfile::Google),
            "sun" => Ok(StyleProfile::Sun),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}
