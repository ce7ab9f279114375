//! Validation and assembly of CVSS vector strings
//!
//! Given a version selector and a mapping of metric names to values, this
//! module checks the mapping against the matching [`Schema`](crate::Schema)
//! and serializes it as `CVSS:<tag>/<ABBR>:<CODE>/...`.
//!
//! # Implementation Model
//!
//! Building is a pure pipeline with no retained state:
//!
//! 1. Resolve the schema for the requested version
//! 2. Require every mandatory metric, reporting the first one missing in schema order
//! 3. Resolve each supplied value to its code, rejecting values the metric does not accept
//! 4. Emit the tag followed by one `/ABBR:CODE` segment per supplied metric, in schema order
//!
//! Input is anything implementing [`MetricValues`], which covers the standard
//! map types. Keys that name no metric in the schema are ignored so callers can
//! pass superset payloads.

mod builder;
mod metric_values;
mod vector_error;

pub use builder::{build, build_vector};
pub use metric_values::MetricValues;
pub use vector_error::VectorError;
