//! CVSS revision selector.

use crate::vector::VectorError;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A CVSS standard revision known to the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize)]
#[serde(try_from = "RawVersion", into = "u32")]
pub enum CvssVersion {
    /// CVSS v2.0
    #[strum(to_string = "2.0")]
    V2,

    /// CVSS v3.1
    #[strum(to_string = "3.1")]
    V3,
}

impl CvssVersion {
    /// The literal prefix emitted at the head of a vector string.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::V2 => "CVSS:2.0",
            Self::V3 => "CVSS:3.1",
        }
    }

    /// The major version number used to select this revision.
    #[must_use]
    pub const fn major(self) -> u32 {
        match self {
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }
}

impl TryFrom<u32> for CvssVersion {
    type Error = VectorError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            _ => Err(VectorError::UnsupportedVersion {
                version: version.to_string(),
            }),
        }
    }
}

/// Fractional versions select by major number, so `3.0` and `3.1` both pick v3.
impl TryFrom<f64> for CvssVersion {
    type Error = VectorError;

    fn try_from(version: f64) -> Result<Self, Self::Error> {
        if (2.0..3.0).contains(&version) {
            Ok(Self::V2)
        } else if (3.0..4.0).contains(&version) {
            Ok(Self::V3)
        } else {
            Err(VectorError::UnsupportedVersion {
                version: version.to_string(),
            })
        }
    }
}

/// Accepts `3`, `3.1`, and the vector prefix form `CVSS:3.1`.
impl FromStr for CvssVersion {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix("CVSS:").unwrap_or(trimmed);

        if let Ok(major) = number.parse::<u32>() {
            return Self::try_from(major).map_err(|_unsupported| unsupported(s));
        }

        match number.parse::<f64>() {
            Ok(version) => Self::try_from(version).map_err(|_unsupported| unsupported(s)),
            Err(_) => Err(unsupported(s)),
        }
    }
}

fn unsupported(version: &str) -> VectorError {
    VectorError::UnsupportedVersion {
        version: version.to_string(),
    }
}

impl From<CvssVersion> for u32 {
    fn from(version: CvssVersion) -> Self {
        version.major()
    }
}

/// The shapes a version can take in a request document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Major(u32),
    Fractional(f64),
    Text(String),
}

impl TryFrom<RawVersion> for CvssVersion {
    type Error = VectorError;

    fn try_from(raw: RawVersion) -> Result<Self, Self::Error> {
        match raw {
            RawVersion::Major(version) => Self::try_from(version),
            RawVersion::Fractional(version) => Self::try_from(version),
            RawVersion::Text(version) => version.parse(),
        }
    }
}
