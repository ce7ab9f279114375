use core::fmt::{Display, Formatter, Result as FmtResult};

/// Reasons a vector cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// The requested version is not 2 or 3.
    UnsupportedVersion { version: String },

    /// A metric every vector of the version must carry was not supplied.
    MissingMandatoryMetric { metric: &'static str },

    /// A supplied value is not one the metric accepts.
    InvalidMetricValue { metric: &'static str, value: String },
}

impl VectorError {
    /// The metric the error is about, if any.
    #[must_use]
    pub const fn metric(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedVersion { .. } => None,
            Self::MissingMandatoryMetric { metric } | Self::InvalidMetricValue { metric, .. } => Some(*metric),
        }
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported CVSS version '{version}', supported versions are 2 and 3")
            }
            Self::MissingMandatoryMetric { metric } => write!(f, "missing mandatory metric '{metric}'"),
            Self::InvalidMetricValue { metric, value } => write!(f, "invalid value '{value}' for metric '{metric}'"),
        }
    }
}

impl core::error::Error for VectorError {}
