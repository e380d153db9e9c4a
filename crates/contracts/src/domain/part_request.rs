use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::PartRequestStatus;
use crate::shared::raw;

/// Request for a replacement part raised against a warranty claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRequest {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<i64>,
    #[serde(default)]
    pub part_id: String,
    #[serde(default)]
    pub part_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub status: PartRequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_center_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_quantity() -> i64 {
    1
}

impl PartRequest {
    /// Keys this record serializes under
    pub const FIELDS: &'static [&'static str] = &["id", "claimId", "partId", "partName", "quantity", "status", "requestedAt", "serviceCenterName", "rejectionReason"];

    /// Lenient read of a locally stored record. Null or mistyped fields fall
    /// back to their defaults and unnamed keys are kept in `extra`.
    pub fn from_stored(raw: &Value) -> Self {
        let mut record = Self::from_raw(raw);
        record.extra = raw::unknown_fields(raw, Self::FIELDS);
        record
    }

    /// Accepts the stored shape and the server DTO
    /// (`requestId`, `warrantyClaimId`, `faultyPartId`, `requestDate`).
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: raw::i64_field(raw, &["id", "requestId"]).unwrap_or_default(),
            claim_id: raw::i64_field(raw, &["claimId", "warrantyClaimId"]),
            part_id: raw::string_field(raw, &["partId", "faultyPartId", "faultyPartNumber"])
                .unwrap_or_default(),
            part_name: raw::string_field(raw, &["partName", "faultyPartName"])
                .unwrap_or_default(),
            quantity: raw::i64_field(raw, &["quantity"]).unwrap_or_else(default_quantity),
            status: raw::string_field(raw, &["status"])
                .and_then(|s| PartRequestStatus::from_code(&s))
                .unwrap_or_default(),
            requested_at: raw::string_field(raw, &["requestedAt", "requestDate"]),
            service_center_name: raw::string_field(raw, &["serviceCenterName"]),
            rejection_reason: raw::string_field(raw, &["rejectionReason"]),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_server_dto() {
        let raw = json!({
            "requestId": 4,
            "warrantyClaimId": 55,
            "faultyPartId": 9,
            "faultyPartName": "Inverter",
            "requestDate": "2025-03-01T10:00:00",
            "status": "SHIPPED",
            "quantity": 3
        });
        let pr = PartRequest::from_raw(&raw);
        assert_eq!(pr.id, 4);
        assert_eq!(pr.claim_id, Some(55));
        assert_eq!(pr.part_id, "9");
        assert_eq!(pr.part_name, "Inverter");
        assert_eq!(pr.status, PartRequestStatus::Shipped);
        assert_eq!(pr.quantity, 3);
    }

    #[test]
    fn test_missing_fields_default() {
        let pr = PartRequest::from_raw(&json!({"id": 1, "status": "WHATEVER"}));
        assert_eq!(pr.quantity, 1);
        assert_eq!(pr.status, PartRequestStatus::Pending);
        assert!(pr.part_name.is_empty());
    }
}
