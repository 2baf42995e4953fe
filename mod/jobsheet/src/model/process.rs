use serde::{Deserialize, Serialize};

/// Measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Mm,
    Cm,
    M,
    Ft,
    In,
}

impl Default for Unit {
    fn default() -> Self {
        Self::Mm
    }
}

/// A value with a unit. Used for the length-cut target and for the
/// per-step measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default)]
    pub value: f64,

    #[serde(default)]
    pub unit: Unit,
}

/// ProcessDetail captures who/when/where/what-measurement for one
/// manufacturing step. The same shape is reused across all seven
/// in-process slots; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDetail {
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub operator_sign: String,

    #[serde(default)]
    pub machine_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Skiving is recorded twice, once per hose surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkivingDetails {
    #[serde(default)]
    pub internal: ProcessDetail,

    #[serde(default)]
    pub external: ProcessDetail,
}

/// The in-process section: one slot per manufacturing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InProcessDetails {
    #[serde(default)]
    pub hose_cut_details: ProcessDetail,

    #[serde(default)]
    pub skiving_details: SkivingDetails,

    #[serde(default)]
    pub assembly_details: ProcessDetail,

    #[serde(default)]
    pub mandrals_details: ProcessDetail,

    #[serde(default)]
    pub crimping_details: ProcessDetail,

    #[serde(default)]
    pub welding_details: ProcessDetail,

    #[serde(default)]
    pub punching_tagging_details: ProcessDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_wire_literals() {
        assert_eq!(serde_json::to_value(Unit::Mm).unwrap(), "mm");
        assert_eq!(serde_json::to_value(Unit::Ft).unwrap(), "ft");
        let back: Unit = serde_json::from_value(serde_json::json!("cm")).unwrap();
        assert_eq!(back, Unit::Cm);
    }

    #[test]
    fn process_detail_roundtrip() {
        let d = ProcessDetail {
            date: "2025-02-11".into(),
            operator_sign: "RK".into(),
            machine_number: "M-04".into(),
            measurements: Some(Measurement {
                value: 12.5,
                unit: Unit::Mm,
            }),
            additional_notes: None,
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: ProcessDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn empty_slot_deserializes_from_empty_object() {
        let d: ProcessDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(d, ProcessDetail::default());
        assert!(d.measurements.is_none());
    }
}
