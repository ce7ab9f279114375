use super::{CvssVersion, MetricDef, v2, v3};
use crate::vector::VectorError;

/// The full metric layout of one CVSS revision.
#[derive(Debug)]
pub struct Schema {
    pub version: CvssVersion,

    /// Literal prefix of every vector built against this schema
    pub tag: &'static str,

    /// Metrics in the order they appear in a vector
    pub metrics: &'static [MetricDef],
}

pub static CVSS_V2: Schema = Schema {
    version: CvssVersion::V2,
    tag: CvssVersion::V2.tag(),
    metrics: v2::METRICS,
};

pub static CVSS_V3: Schema = Schema {
    version: CvssVersion::V3,
    tag: CvssVersion::V3.tag(),
    metrics: v3::METRICS,
};

/// Look up the schema for a typed version.
#[must_use]
pub const fn schema(version: CvssVersion) -> &'static Schema {
    match version {
        CvssVersion::V2 => &CVSS_V2,
        CvssVersion::V3 => &CVSS_V3,
    }
}

/// Look up the schema for a major version number.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedVersion`] for anything other than 2 or 3.
pub fn get_schema(version: u32) -> Result<&'static Schema, VectorError> {
    CvssVersion::try_from(version).map(schema)
}

impl Schema {
    /// Find a metric by its caller-facing name, e.g. `attackVector`.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&'static MetricDef> {
        self.metrics.iter().find(|def| def.name == name)
    }

    /// Find a metric by its vector abbreviation, e.g. `AV`.
    #[must_use]
    pub fn metric_by_abbreviation(&self, abbreviation: &str) -> Option<&'static MetricDef> {
        self.metrics.iter().find(|def| def.abbreviation == abbreviation)
    }

    pub fn mandatory_metrics(&self) -> impl Iterator<Item = &'static MetricDef> {
        self.metrics.iter().filter(|def| def.mandatory)
    }

    pub fn optional_metrics(&self) -> impl Iterator<Item = &'static MetricDef> {
        self.metrics.iter().filter(|def| !def.mandatory)
    }
}
