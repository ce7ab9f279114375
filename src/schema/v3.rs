//! CVSS v3.1 metric table.

use super::MetricDef;
use super::metric_def::metric_def;

pub const METRICS: &[MetricDef] = &[
    // Base
    metric_def!(0, "attackVector", "AV", Mandatory, [
        "Network" => "N",
        "Adjacent" => "A",
        "Local" => "L",
        "Physical" => "P",
    ]),
    metric_def!(1, "attackComplexity", "AC", Mandatory, [
        "Low" => "L",
        "High" => "H",
    ]),
    metric_def!(2, "privilegesRequired", "PR", Mandatory, [
        "None" => "N",
        "Low" => "L",
        "High" => "H",
    ]),
    metric_def!(3, "userInteraction", "UI", Mandatory, [
        "None" => "N",
        "Required" => "R",
    ]),
    metric_def!(4, "scope", "S", Mandatory, [
        "Unchanged" => "U",
        "Changed" => "C",
    ]),
    metric_def!(5, "confidentialityImpact", "C", Mandatory, [
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
    metric_def!(6, "integrityImpact", "I", Mandatory, [
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
    metric_def!(7, "availabilityImpact", "A", Mandatory, [
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
    // Temporal
    metric_def!(8, "exploitCodeMaturity", "E", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Functional" => "F",
        "Proof-of-Concept" => "P",
        "Unproven" => "U",
    ]),
    metric_def!(9, "remediationLevel", "RL", Optional, [
        "Not Defined" => "X",
        "Unavailable" => "U",
        "Workaround" => "W",
        "Temporary Fix" => "T",
        "Official Fix" => "O",
    ]),
    metric_def!(10, "reportConfidence", "RC", Optional, [
        "Not Defined" => "X",
        "Confirmed" => "C",
        "Reasonable" => "R",
        "Unknown" => "U",
    ]),
    // Environmental
    metric_def!(11, "confidentialityRequirement", "CR", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Medium" => "M",
        "Low" => "L",
    ]),
    metric_def!(12, "integrityRequirement", "IR", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Medium" => "M",
        "Low" => "L",
    ]),
    metric_def!(13, "availabilityRequirement", "AR", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Medium" => "M",
        "Low" => "L",
    ]),
    metric_def!(14, "modifiedAttackVector", "MAV", Optional, [
        "Not Defined" => "X",
        "Network" => "N",
        "Adjacent" => "A",
        "Local" => "L",
        "Physical" => "P",
    ]),
    metric_def!(15, "modifiedAttackComplexity", "MAC", Optional, [
        "Not Defined" => "X",
        "Low" => "L",
        "High" => "H",
    ]),
    metric_def!(16, "modifiedPrivilegesRequired", "MPR", Optional, [
        "Not Defined" => "X",
        "None" => "N",
        "Low" => "L",
        "High" => "H",
    ]),
    metric_def!(17, "modifiedUserInteraction", "MUI", Optional, [
        "Not Defined" => "X",
        "None" => "N",
        "Required" => "R",
    ]),
    metric_def!(18, "modifiedScope", "MS", Optional, [
        "Not Defined" => "X",
        "Unchanged" => "U",
        "Changed" => "C",
    ]),
    metric_def!(19, "modifiedConfidentialityImpact", "MC", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
    metric_def!(20, "modifiedIntegrityImpact", "MI", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
    metric_def!(21, "modifiedAvailabilityImpact", "MA", Optional, [
        "Not Defined" => "X",
        "High" => "H",
        "Low" => "L",
        "None" => "N",
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> &'static MetricDef {
        METRICS.iter().find(|def| def.name == name).unwrap()
    }

    #[test]
    fn test_attack_vector_codes() {
        let av = def("attackVector");
        assert_eq!(av.code_for("Network"), Some("N"));
        assert_eq!(av.code_for("Adjacent"), Some("A"));
        assert_eq!(av.code_for("Local"), Some("L"));
        assert_eq!(av.code_for("Physical"), Some("P"));
        assert_eq!(av.code_for("Adjacent Network"), None);
    }

    #[test]
    fn test_modified_metrics_mirror_base_metrics() {
        for (base, modified) in [
            ("attackVector", "modifiedAttackVector"),
            ("attackComplexity", "modifiedAttackComplexity"),
            ("privilegesRequired", "modifiedPrivilegesRequired"),
            ("userInteraction", "modifiedUserInteraction"),
            ("scope", "modifiedScope"),
            ("confidentialityImpact", "modifiedConfidentialityImpact"),
            ("integrityImpact", "modifiedIntegrityImpact"),
            ("availabilityImpact", "modifiedAvailabilityImpact"),
        ] {
            let base = def(base);
            let modified = def(modified);

            assert_eq!(modified.abbreviation, format!("M{}", base.abbreviation));
            for (value, code) in base.values {
                assert_eq!(modified.code_for(value), Some(*code), "'{value}' in '{}'", modified.name);
            }
        }
    }

    #[test]
    fn test_not_defined_uses_v3_code() {
        for def in METRICS.iter().filter(|def| !def.mandatory) {
            assert_eq!(def.code_for("Not Defined"), Some("X"), "metric '{}'", def.name);
        }
    }

    #[test]
    fn test_mandatory_metrics_reject_not_defined() {
        for def in METRICS.iter().filter(|def| def.mandatory) {
            assert_eq!(def.code_for("Not Defined"), None, "metric '{}'", def.name);
        }
    }
}
