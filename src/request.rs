//! Declarative vector requests
//!
//! A request names a CVSS version and a table of metric values, and can be
//! written as JSON or TOML:
//!
//! ```json
//! {
//!     "version": 3,
//!     "metrics": { "attackVector": "Network", "scope": "Changed" }
//! }
//! ```
//!
//! ```toml
//! version = 2
//!
//! [metrics]
//! accessVector = "Local"
//! ```
//!
//! A JSON `null` metric value counts as not supplied, so a null mandatory
//! metric is reported as missing and a null optional metric is left out.

use crate::Result;
use crate::schema::CvssVersion;
use crate::vector::{self, VectorError};
use camino::Utf8Path;
use ohno::{IntoAppError, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

const LOG_TARGET: &str = "   request";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorRequest {
    /// CVSS revision to build against
    pub version: CvssVersion,

    /// Metric values keyed by metric name
    #[serde(default)]
    pub metrics: BTreeMap<String, Option<String>>,
}

impl VectorRequest {
    #[must_use]
    pub const fn new(version: CvssVersion) -> Self {
        Self {
            version,
            metrics: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.metrics.insert(name.into(), Some(value.into()));
        self
    }

    /// Parse a request from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed request
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str::<Self>(text).into_app_err("parsing JSON vector request")
    }

    /// Parse a request from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed request
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str::<Self>(text).into_app_err("parsing TOML vector request")
    }

    /// Load a request from a `.json` or `.toml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported extension, or cannot be parsed
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading vector request '{path}'"))?;

        let request: Self = match path.extension() {
            Some("json") => serde_json::from_str::<Self>(&text).into_app_err_with(|| format!("parsing vector request '{path}'"))?,
            Some("toml") => toml::from_str::<Self>(&text).into_app_err_with(|| format!("parsing vector request '{path}'"))?,
            _ => bail!("unsupported vector request file '{path}', expected a .json or .toml extension"),
        };

        log::info!(target: LOG_TARGET, "Loaded CVSS {} request with {} metrics from '{path}'", request.version, request.metrics.len());
        Ok(request)
    }

    /// Metrics that carry a value, skipping null entries.
    #[must_use]
    pub fn supplied_metrics(&self) -> BTreeMap<&str, &str> {
        self.metrics
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
            .collect()
    }

    /// Build the vector string this request describes
    ///
    /// # Errors
    ///
    /// Returns a [`VectorError`] if the metrics are incomplete or carry unknown values
    pub fn build(&self) -> Result<String, VectorError> {
        vector::build(self.version, &self.supplied_metrics())
    }
}

/// Build a vector from a flat JSON object of metric values
///
/// This is the one-shot form of [`VectorRequest`]: the version is passed
/// separately and `json` holds only the metrics, e.g.
/// `{"attackVector": "Network", "scope": "Changed", ...}`.
///
/// # Errors
///
/// Returns an error if the version is unsupported, the JSON is malformed, or the metrics fail validation
pub fn build_vector_from_json(version: u32, json: &str) -> Result<String> {
    let version = CvssVersion::try_from(version).into_app_err("selecting CVSS version")?;
    let metrics: BTreeMap<String, Option<String>> = serde_json::from_str(json).into_app_err("parsing CVSS metrics JSON")?;

    VectorRequest { version, metrics }
        .build()
        .into_app_err_with(|| format!("building CVSS {version} vector"))
}
