use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHistory {
    pub service_history_id: i64,
    #[serde(default)]
    pub service_date: Option<String>,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_vin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHistoryPayload {
    pub service_date: String,
    pub service_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
    pub vehicle_id: i64,
}
