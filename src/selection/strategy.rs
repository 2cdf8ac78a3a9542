use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::manifest::Variant;
use crate::manifest::VersionDescriptor;
use crate::Error;
use crate::Result;

/// Within a release line it is useful to test that the latest release can
/// upgrade to that same line's in-development head.
///
/// Every strategy below that honors this exception calls this one function;
/// the predicate must never be reimplemented per strategy or the variants
/// will drift apart.
pub fn is_same_family_current_to_indev(
    origin: &VersionDescriptor,
    destination: &VersionDescriptor,
) -> bool {
    origin.family == destination.family
        && origin.variant == Variant::Current
        && destination.variant == Variant::InDev
}

/// Predicate over (origin, destination) edges, chosen once per test run via
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SelectionStrategy {
    /// Accept every edge
    All,
    /// Upgrades between equal variants across lines, plus current -> indev
    /// within a line
    Both,
    /// Exclusively in-development branches, so bug fixes show up, plus the
    /// same-family exception
    Indev,
    /// Everything [`Indev`](Self::Indev) would reject (releases), plus the
    /// same-family exception
    Releases,
}

impl SelectionStrategy {
    pub fn accepts(
        &self,
        origin: &VersionDescriptor,
        destination: &VersionDescriptor,
    ) -> bool {
        match self {
            SelectionStrategy::All => true,
            SelectionStrategy::Both => {
                origin.variant == destination.variant
                    || is_same_family_current_to_indev(origin, destination)
            }
            SelectionStrategy::Indev => {
                (origin.is_indev() && destination.is_indev())
                    || is_same_family_current_to_indev(origin, destination)
            }
            SelectionStrategy::Releases => {
                !SelectionStrategy::Indev.accepts(origin, destination)
                    || is_same_family_current_to_indev(origin, destination)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::All => "ALL",
            SelectionStrategy::Both => "BOTH",
            SelectionStrategy::Indev => "INDEV",
            SelectionStrategy::Releases => "RELEASES",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionStrategy {
    type Err = Error;

    /// Case-insensitive; an unrecognized token is a fatal configuration
    /// error.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(SelectionStrategy::All),
            "BOTH" => Ok(SelectionStrategy::Both),
            "INDEV" => Ok(SelectionStrategy::Indev),
            "RELEASES" => Ok(SelectionStrategy::Releases),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for SelectionStrategy {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SelectionStrategy> for String {
    fn from(strategy: SelectionStrategy) -> Self {
        strategy.as_str().to_string()
    }
}
