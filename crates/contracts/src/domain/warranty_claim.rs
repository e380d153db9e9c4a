use serde::{Deserialize, Serialize};

use crate::enums::WarrantyClaimStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    pub warranty_claim_id: i64,
    #[serde(default)]
    pub claim_date: Option<String>,
    #[serde(default)]
    pub status: WarrantyClaimStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resolution_date: Option<String>,
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    #[serde(default)]
    pub vehicle_vin: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaimPayload {
    pub description: String,
    pub vehicle_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_part_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_center_id: Option<i64>,
}

/// Body of `PATCH /api/warranty-claims/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatusUpdate {
    pub status: WarrantyClaimStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// Body of `PATCH /api/warranty-claims/{id}/evm-reject`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRejection {
    pub reason: String,
}

/// Body of `PATCH /api/warranty-claims/{id}/tech-complete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCompletion {
    pub notes: String,
}
