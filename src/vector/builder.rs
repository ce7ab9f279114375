use super::{MetricValues, VectorError};
use crate::schema::{CvssVersion, Schema, get_schema, schema};

const LOG_TARGET: &str = "    vector";

/// Build a vector string for a major version number.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedVersion`] if `version` is not 2 or 3,
/// [`VectorError::MissingMandatoryMetric`] for the first mandatory metric
/// absent from `values`, and [`VectorError::InvalidMetricValue`] for a value
/// the metric does not accept.
pub fn build_vector(version: u32, values: &impl MetricValues) -> Result<String, VectorError> {
    assemble(get_schema(version)?, values)
}

/// Build a vector string for a typed version.
///
/// # Errors
///
/// Returns the same validation errors as [`build_vector`].
pub fn build(version: CvssVersion, values: &impl MetricValues) -> Result<String, VectorError> {
    assemble(schema(version), values)
}

fn assemble(schema: &Schema, values: &impl MetricValues) -> Result<String, VectorError> {
    if let Some(missing) = schema.mandatory_metrics().find(|def| values.metric_value(def.name).is_none()) {
        log::debug!(target: LOG_TARGET, "CVSS {} input lacks mandatory metric '{}'", schema.version, missing.name);
        return Err(VectorError::MissingMandatoryMetric { metric: missing.name });
    }

    let mut vector = String::from(schema.tag);
    for def in schema.metrics {
        let Some(value) = values.metric_value(def.name) else {
            continue;
        };

        let code = def.code_for(value).ok_or_else(|| VectorError::InvalidMetricValue {
            metric: def.name,
            value: value.to_string(),
        })?;

        vector.push('/');
        vector.push_str(def.abbreviation);
        vector.push(':');
        vector.push_str(code);
    }

    log::debug!(target: LOG_TARGET, "Built vector {vector}");
    Ok(vector)
}
