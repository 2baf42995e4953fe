//! Map dotted violation paths to the flat keys the form UI uses.
//!
//! The form renders one error slot per input, keyed by a short flat
//! name. Known interactive-field paths translate through the table
//! below; anything else (new schema fields, non-interactive leaves)
//! falls through unchanged so it still surfaces somewhere instead of
//! being dropped.

use std::collections::BTreeMap;

use super::validate::Violation;

/// Translate one dotted path to its flat UI key. Unmapped paths pass
/// through as-is.
pub fn reconcile(path: &str) -> &str {
    match path {
        "orderDetails.customer" => "customer",
        "orderDetails.flxTagNo" => "flxTagNo",
        "orderDetails.customerTagNo" => "customerTagNo",
        "orderDetails.deliveryDueDate" => "deliveryDueDate",
        "orderDetails.reference" => "reference",
        "jobDetails.hoseType" => "hoseType",
        "jobDetails.hoseId" => "hoseId",
        "jobDetails.quantity" => "quantity",
        "jobDetails.moc" => "moc",
        "jobDetails.lengthCut.value" => "lengthCutValue",
        "jobDetails.lengthCut.unit" => "lengthCutUnit",
        "jobDetails.traceability.hoseBatchNumber" => "hoseBatchNumber",
        "jobDetails.traceability.flexifloBatchNo" => "flexifloBatchNo",
        "footer.supervisorSignature" => "supervisorSignature",
        "footer.date" => "date",
        other => other,
    }
}

/// Fold violations into a flat-key error map. When several violations
/// reconcile to the same key, the first one wins; one message per input
/// is all the form shows.
pub fn collect_flat(violations: &[Violation]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for v in violations {
        map.entry(reconcile(&v.path).to_string())
            .or_insert_with(|| v.message.clone());
    }
    map
}
