use serde::{Deserialize, Serialize};

use super::process::{InProcessDetails, Measurement};

/// Material of construction codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Material {
    Cs,
    Ss,
    Al,
    Br,
}

/// Fitting selection for one hose end. The empty literal is a real wire
/// value: an untouched dropdown submits "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FittingChoice {
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "Adaptor A")]
    AdaptorA,
    #[serde(rename = "Adaptor B")]
    AdaptorB,
    #[serde(rename = "Custom")]
    Custom,
}

impl Default for FittingChoice {
    fn default() -> Self {
        Self::Unset
    }
}

/// Pigging stage options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiggingOption {
    #[serde(rename = "Before Assembly")]
    BeforeAssembly,
    #[serde(rename = "After Assembly")]
    AfterAssembly,
    #[serde(rename = "Before Testing")]
    BeforeTesting,
    #[serde(rename = "After Testing")]
    AfterTesting,
    #[serde(rename = "Final Inspection")]
    FinalInspection,
    #[serde(rename = "Packaging")]
    Packaging,
}

/// Customer order header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(default)]
    pub customer: String,

    /// Internal tag number. Designated unique across stored records.
    #[serde(default)]
    pub flx_tag_no: String,

    #[serde(default)]
    pub customer_tag_no: String,

    #[serde(default)]
    pub delivery_due_date: String,

    #[serde(default)]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FittingType {
    #[serde(default)]
    pub end_a: FittingChoice,

    #[serde(default)]
    pub end_b: FittingChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Traceability {
    #[serde(default)]
    pub hose_batch_number: String,

    #[serde(default)]
    pub flexiflo_batch_no: String,
}

/// What is being built and from what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(default)]
    pub hose_type: String,

    #[serde(default)]
    pub hose_id: String,

    #[serde(default)]
    pub length_cut: Measurement,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub fitting_type: FittingType,

    #[serde(default)]
    pub moc: Vec<Material>,

    #[serde(default)]
    pub traceability: Traceability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Remarks {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub welding_rod_number: String,

    #[serde(default)]
    pub welding_rod_size: String,

    #[serde(default)]
    pub pigging_options: Vec<PiggingOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub supervisor_signature: String,

    #[serde(default)]
    pub date: String,
}

/// InspectionReport is the full job-sheet record.
///
/// `id` and the timestamps are assigned by the persistence layer; a
/// client draft leaves them empty and they are skipped on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub order_details: OrderDetails,

    #[serde(default)]
    pub job_details: JobDetails,

    #[serde(default)]
    pub in_process_details: InProcessDetails,

    #[serde(default)]
    pub remarks: Remarks,

    #[serde(default)]
    pub footer: Footer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    pub fn sample_report() -> InspectionReport {
        InspectionReport {
            id: "r001".into(),
            order_details: OrderDetails {
                customer: "Acme Refinery".into(),
                flx_tag_no: "FLX-1042".into(),
                customer_tag_no: "AC-77".into(),
                delivery_due_date: "2025-03-01".into(),
                reference: "PO-5531".into(),
            },
            job_details: JobDetails {
                hose_type: "PTFE Smoothbore".into(),
                hose_id: "H-106".into(),
                length_cut: Measurement {
                    value: 1250.0,
                    unit: Unit::Mm,
                },
                quantity: 4,
                fitting_type: FittingType {
                    end_a: FittingChoice::AdaptorA,
                    end_b: FittingChoice::Custom,
                },
                moc: vec![Material::Ss, Material::Cs],
                traceability: Traceability {
                    hose_batch_number: "HB-2025-08".into(),
                    flexiflo_batch_no: "FF-119".into(),
                },
            },
            remarks: Remarks {
                text: "Handle with care".into(),
                pigging_options: vec![PiggingOption::AfterAssembly],
                ..Default::default()
            },
            footer: Footer {
                supervisor_signature: "S. Rao".into(),
                date: "2025-02-12".into(),
            },
            created_at: Some("2025-02-12T10:00:00+00:00".into()),
            updated_at: Some("2025-02-12T10:00:00+00:00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn report_json_roundtrip() {
        let r = sample_report();
        let json = serde_json::to_string(&r).unwrap();
        let back: InspectionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["orderDetails"]["flxTagNo"], "FLX-1042");
        assert_eq!(json["jobDetails"]["lengthCut"]["unit"], "mm");
        assert_eq!(json["jobDetails"]["moc"][0], "SS");
        assert_eq!(json["jobDetails"]["fittingType"]["endA"], "Adaptor A");
        assert_eq!(json["remarks"]["piggingOptions"][0], "After Assembly");
        assert_eq!(json["footer"]["supervisorSignature"], "S. Rao");
    }

    #[test]
    fn draft_default_skips_system_fields() {
        let json = serde_json::to_value(InspectionReport::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("createdAt"));
        assert!(!obj.contains_key("updatedAt"));
        assert_eq!(json["jobDetails"]["fittingType"]["endA"], "");
        assert_eq!(json["jobDetails"]["quantity"], 0);
    }
}
