use serde::{Deserialize, Serialize};

/// A part fitted to a specific vehicle, with its own warranty window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledPart {
    pub installed_part_id: i64,
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_vin: Option<String>,
    #[serde(default)]
    pub installation_date: Option<String>,
    #[serde(default)]
    pub warranty_expiration_date: Option<String>,
    #[serde(default)]
    pub mileage_at_installation: Option<i64>,
    #[serde(default)]
    pub warranty_period_months: Option<i32>,
    #[serde(default)]
    pub warranty_mileage_limit: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledPartPayload {
    pub part_id: String,
    pub vehicle_id: i64,
    pub installation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage_at_installation: Option<i64>,
}
