/// One scoring dimension of a CVSS revision.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDef {
    /// Name used by callers, e.g. `attackVector`
    pub name: &'static str,

    /// Short form emitted in the vector, e.g. `AV`
    pub abbreviation: &'static str,

    /// Whether every valid vector must carry this metric
    pub mandatory: bool,

    /// Position of the metric in the assembled vector
    pub order: usize,

    /// Accepted values paired with their standard codes
    pub values: &'static [(&'static str, &'static str)],
}

macro_rules! metric_def {
    (@def $order:expr, $name:expr, $abbreviation:expr, $mandatory:expr, [$($value:expr => $code:expr),+]) => {
        $crate::schema::MetricDef {
            name: $name,
            abbreviation: $abbreviation,
            mandatory: $mandatory,
            order: $order,
            values: &[$(($value, $code)),+],
        }
    };
    ($order:expr, $name:expr, $abbreviation:expr, Mandatory, [$($value:expr => $code:expr),+ $(,)?]) => {
        metric_def!(@def $order, $name, $abbreviation, true, [$($value => $code),+])
    };
    ($order:expr, $name:expr, $abbreviation:expr, Optional, [$($value:expr => $code:expr),+ $(,)?]) => {
        metric_def!(@def $order, $name, $abbreviation, false, [$($value => $code),+])
    };
}

pub(super) use metric_def;

impl MetricDef {
    /// Resolve a human-readable value to its vector code.
    ///
    /// Matching is case-sensitive.
    #[must_use]
    pub fn code_for(&self, value: &str) -> Option<&'static str> {
        self.values.iter().find(|(name, _)| *name == value).map(|(_, code)| *code)
    }

    /// Resolve a vector code back to its human-readable value.
    #[must_use]
    pub fn value_for(&self, code: &str) -> Option<&'static str> {
        self.values.iter().find(|(_, c)| *c == code).map(|(name, _)| *name)
    }

    /// The human-readable values this metric accepts, in table order.
    pub fn accepted_values(&self) -> impl Iterator<Item = &'static str> {
        self.values.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: MetricDef = metric_def!(4, "userInteraction", "UI", Mandatory, ["None" => "N", "Required" => "R"]);

    const SAMPLE_OPTIONAL: MetricDef = metric_def!(9, "modifiedScope", "MS", Optional, [
        "Not Defined" => "X",
        "Unchanged" => "U",
        "Changed" => "C",
    ]);

    #[test]
    fn test_macro_fills_fields() {
        assert_eq!(SAMPLE.name, "userInteraction");
        assert_eq!(SAMPLE.abbreviation, "UI");
        assert!(SAMPLE.mandatory);
        assert_eq!(SAMPLE.order, 4);
        assert_eq!(SAMPLE.values.len(), 2);

        assert!(!SAMPLE_OPTIONAL.mandatory);
        assert_eq!(SAMPLE_OPTIONAL.order, 9);
    }

    #[test]
    fn test_code_for() {
        assert_eq!(SAMPLE.code_for("None"), Some("N"));
        assert_eq!(SAMPLE.code_for("Required"), Some("R"));
        assert_eq!(SAMPLE_OPTIONAL.code_for("Not Defined"), Some("X"));
    }

    #[test]
    fn test_code_for_is_case_sensitive() {
        assert_eq!(SAMPLE.code_for("none"), None);
        assert_eq!(SAMPLE.code_for("REQUIRED"), None);
        assert_eq!(SAMPLE.code_for(""), None);
    }

    #[test]
    fn test_value_for() {
        assert_eq!(SAMPLE.value_for("R"), Some("Required"));
        assert_eq!(SAMPLE_OPTIONAL.value_for("U"), Some("Unchanged"));
        assert_eq!(SAMPLE.value_for("X"), None);
    }

    #[test]
    fn test_accepted_values() {
        let values: Vec<_> = SAMPLE_OPTIONAL.accepted_values().collect();
        assert_eq!(values, ["Not Defined", "Unchanged", "Changed"]);
    }
}
