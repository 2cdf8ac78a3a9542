use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// A release line of the database under test. Multiple version descriptors
/// may share a family (the pinned latest release and the line's moving
/// development head).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Family {
    V2_1,
    V2_2,
    V3_0,
    V3_11,
    V4_0,
    V4_1,
    V5_0,
    V5_1,
}

/// The line currently developed on the main branch. Update whenever the
/// database branches a new release line.
pub const TRUNK: Family = Family::V5_1;

impl Family {
    /// All known release lines, oldest first.
    pub const ALL: [Family; 8] = [
        Family::V2_1,
        Family::V2_2,
        Family::V3_0,
        Family::V3_11,
        Family::V4_0,
        Family::V4_1,
        Family::V5_0,
        Family::V5_1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::V2_1 => "2.1",
            Family::V2_2 => "2.2",
            Family::V3_0 => "3.0",
            Family::V3_11 => "3.11",
            Family::V4_0 => "4.0",
            Family::V4_1 => "4.1",
            Family::V5_0 => "5.0",
            Family::V5_1 => "5.1",
        }
    }

    /// Classify a concrete version string (e.g. `"4.0.17"`) into its release
    /// line.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedVersion`] for a version outside every
    /// known line - when that happens it is time to update the manifest.
    pub fn detect(version: &str) -> Result<Family> {
        // "3.11" must win over "3.1"-style prefixes, so longest prefix first
        let mut lines = Family::ALL;
        lines.sort_by_key(|f| std::cmp::Reverse(f.as_str().len()));
        lines
            .iter()
            .find(|family| version.starts_with(family.as_str()))
            .copied()
            .ok_or_else(|| Error::UnsupportedVersion(version.to_string()))
    }
}

impl fmt::Display for Family {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Family::ALL
            .iter()
            .find(|family| family.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnsupportedVersion(s.to_string()))
    }
}

impl TryFrom<String> for Family {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.as_str().to_string()
    }
}
