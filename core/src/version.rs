use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An exact `major.minor.patch` version.
///
/// Ordering is lexicographic over the three components. Serializes as a
/// `{"major": .., "minor": .., "patch": ..}` object, which is the shape
/// the catalog and downstream consumers expect.
///
/// # Example
///
/// ```
/// use addonstore_core::MajorMinorPatch;
///
/// let min: MajorMinorPatch = "2019.3".parse().unwrap();
/// assert_eq!(min, MajorMinorPatch::new(2019, 3, 0));
/// assert!(min < MajorMinorPatch::new(2023, 1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MajorMinorPatch {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl MajorMinorPatch {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the components as an ordered triple.
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl From<(u32, u32, u32)> for MajorMinorPatch {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<[u32; 3]> for MajorMinorPatch {
    fn from([major, minor, patch]: [u32; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

impl fmt::Display for MajorMinorPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses the host's API version text, `"2019.3"` or `"2019.3.1"`.
impl FromStr for MajorMinorPatch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(ParseError::invalid(
                "version",
                format!("expected major.minor[.patch], got {:?}", s),
            ));
        }

        let component = |part: &str| {
            part.parse::<u32>()
                .map_err(|e| ParseError::invalid("version", format!("{:?}: {}", s, e)))
        };

        let major = component(parts[0])?;
        let minor = component(parts[1])?;
        let patch = match parts.get(2) {
            Some(p) => component(*p)?,
            None => 0,
        };
        Ok(Self::new(major, minor, patch))
    }
}

impl From<MajorMinorPatch> for semver::Version {
    fn from(v: MajorMinorPatch) -> Self {
        semver::Version::new(v.major.into(), v.minor.into(), v.patch.into())
    }
}

impl TryFrom<&semver::Version> for MajorMinorPatch {
    type Error = ParseError;

    fn try_from(v: &semver::Version) -> Result<Self, Self::Error> {
        if !v.pre.is_empty() || !v.build.is_empty() {
            return Err(ParseError::invalid(
                "version",
                format!("{} carries pre-release or build metadata", v),
            ));
        }
        let narrow = |n: u64| {
            u32::try_from(n).map_err(|_| ParseError::invalid("version", format!("{} out of range", n)))
        };
        Ok(Self::new(narrow(v.major)?, narrow(v.minor)?, narrow(v.patch)?))
    }
}
