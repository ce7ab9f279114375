//! Build canonical CVSS vector strings from named metric values.
//!
//! Callers describe a vulnerability with human-readable metric values such as
//! `attackVector = "Network"` and get back the compact vector form used by the
//! CVSS v2 and v3 standards, e.g. `CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H`.
//!
//! # Module Organization
//!
//! - [`schema`](mod@schema): Static per-version metric tables
//! - [`vector`]: Validation and assembly of vector strings
//! - [`request`]: JSON and TOML request documents that describe a vector
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let values = HashMap::from([
//!     ("accessVector", "Local"),
//!     ("accessComplexity", "High"),
//!     ("authentication", "Multiple"),
//!     ("confidentialityImpact", "None"),
//!     ("integrityImpact", "None"),
//!     ("availabilityImpact", "None"),
//! ]);
//!
//! let vector = cvss_vector::build_vector(2, &values).unwrap();
//! assert_eq!(vector, "CVSS:2.0/AV:L/AC:H/Au:M/C:N/I:N/A:N");
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod request;
pub mod schema;
pub mod vector;

pub use request::{VectorRequest, build_vector_from_json};
pub use schema::{CvssVersion, MetricDef, Schema, get_schema, schema};
pub use vector::{MetricValues, VectorError, build, build_vector};
