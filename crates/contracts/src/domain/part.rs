use serde::{Deserialize, Serialize};

/// Catalogue part. Prices are in VND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub part_id: String,
    #[serde(default)]
    pub part_name: String,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl Part {
    pub fn new(part_id: &str, part_name: &str, price: f64) -> Self {
        Self {
            part_id: part_id.to_string(),
            part_name: part_name.to_string(),
            part_number: part_id.to_string(),
            manufacturer: None,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPayload {
    pub part_id: String,
    pub part_name: String,
    pub part_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    pub price: f64,
}
