use serde::{Deserialize, Serialize};

/// Part category, capping how many parts of one kind a vehicle may carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartCategory {
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_vehicle: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_max_quantity() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

/// Create and update body; the name must be unique server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartCategoryPayload {
    pub category_name: String,
    pub max_quantity_per_vehicle: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

impl PartCategoryPayload {
    /// Names of the fields that fail the form rules: a blank name or a
    /// per-vehicle cap below one.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut invalid = Vec::new();
        if self.category_name.trim().is_empty() {
            invalid.push("categoryName");
        }
        if self.max_quantity_per_vehicle < 1 {
            invalid.push("maxQuantityPerVehicle");
        }
        invalid
    }
}
