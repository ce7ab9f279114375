//! CVSS v2.0 metric table.

use super::MetricDef;
use super::metric_def::metric_def;

pub const METRICS: &[MetricDef] = &[
    // Base
    metric_def!(0, "accessVector", "AV", Mandatory, [
        "Local" => "L",
        "Adjacent Network" => "A",
        "Network" => "N",
    ]),
    metric_def!(1, "accessComplexity", "AC", Mandatory, [
        "High" => "H",
        "Medium" => "M",
        "Low" => "L",
    ]),
    metric_def!(2, "authentication", "Au", Mandatory, [
        "Multiple" => "M",
        "Single" => "S",
        "None" => "N",
    ]),
    metric_def!(3, "confidentialityImpact", "C", Mandatory, [
        "None" => "N",
        "Partial" => "P",
        "Complete" => "C",
    ]),
    metric_def!(4, "integrityImpact", "I", Mandatory, [
        "None" => "N",
        "Partial" => "P",
        "Complete" => "C",
    ]),
    metric_def!(5, "availabilityImpact", "A", Mandatory, [
        "None" => "N",
        "Partial" => "P",
        "Complete" => "C",
    ]),
    // Temporal
    metric_def!(6, "exploitability", "E", Optional, [
        "Unproven" => "U",
        "Proof-of-concept" => "POC",
        "Functional" => "F",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
    metric_def!(7, "remediationLevel", "RL", Optional, [
        "Official fix" => "OF",
        "Temporary fix" => "TF",
        "Workaround" => "W",
        "Unavailable" => "U",
        "Not Defined" => "ND",
    ]),
    metric_def!(8, "reportConfidence", "RC", Optional, [
        "Unconfirmed" => "UC",
        "Uncorroborated" => "UR",
        "Confirmed" => "C",
        "Not Defined" => "ND",
    ]),
    // Environmental
    metric_def!(9, "collateralDamagePotential", "CDP", Optional, [
        "None" => "N",
        "Low" => "L",
        "Low-Medium" => "LM",
        "Medium-High" => "MH",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
    metric_def!(10, "targetDistribution", "TD", Optional, [
        "None" => "N",
        "Low" => "L",
        "Medium" => "M",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
    metric_def!(11, "confidentialityRequirement", "CR", Optional, [
        "Low" => "L",
        "Medium" => "M",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
    metric_def!(12, "integrityRequirement", "IR", Optional, [
        "Low" => "L",
        "Medium" => "M",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
    metric_def!(13, "availabilityRequirement", "AR", Optional, [
        "Low" => "L",
        "Medium" => "M",
        "High" => "H",
        "Not Defined" => "ND",
    ]),
];
