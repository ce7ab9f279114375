//! Static metric tables for each supported CVSS revision
//!
//! This module owns the authoritative description of what a valid vector looks
//! like for CVSS v2.0 and v3.1: which metrics exist, the order they appear in,
//! which ones are mandatory, and the abbreviation code for every accepted value.
//!
//! # Implementation Model
//!
//! Each revision is a [`Schema`] holding a `&'static` slice of [`MetricDef`]
//! entries. Definitions are declared with the `metric_def!` macro in `v2.rs` and
//! `v3.rs`, and the position of an entry in its slice is its position in the
//! assembled vector. A [`CvssVersion`] selects the schema, so the builder has a
//! single code path for both revisions.
//!
//! Everything here is constant data. Lookups borrow from the tables and never
//! allocate.

mod cvss_version;
mod metric_def;
mod registry;
mod v2;
mod v3;

pub use cvss_version::CvssVersion;
pub use metric_def::MetricDef;
pub use registry::{CVSS_V2, CVSS_V3, Schema, get_schema, schema};
