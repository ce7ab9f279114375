use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

/// A source of metric values keyed by metric name.
///
/// Implemented for `HashMap` and `BTreeMap` with any string-like keys and
/// values, so `HashMap<&str, &str>` and `BTreeMap<String, String>` both work.
pub trait MetricValues {
    /// The value supplied for `name`, or `None` if the metric was not supplied.
    fn metric_value(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> MetricValues for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn metric_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> MetricValues for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn metric_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<T: MetricValues + ?Sized> MetricValues for &T {
    fn metric_value(&self, name: &str) -> Option<&str> {
        (**self).metric_value(name)
    }
}
