use serde::{Deserialize, Serialize};

use crate::enums::WarrantyStatus;

/// Server verdict on warranty coverage, optionally with a paid-repair fee.
///
/// The frontend never computes coverage or fees itself; it displays these
/// values and at most previews simple arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyValidation {
    pub warranty_status: WarrantyStatus,
    #[serde(default)]
    pub status_description: Option<String>,
    #[serde(default)]
    pub is_valid_for_free_warranty: bool,
    #[serde(default)]
    pub can_provide_paid_warranty: bool,
    #[serde(default)]
    pub estimated_warranty_fee: Option<f64>,
    #[serde(default)]
    pub fee_note: Option<String>,
    #[serde(default)]
    pub warranty_start_date: Option<String>,
    #[serde(default)]
    pub warranty_end_date: Option<String>,
    #[serde(default)]
    pub days_remaining: Option<i64>,
    #[serde(default)]
    pub current_mileage: Option<i64>,
    #[serde(default)]
    pub mileage_limit: Option<i64>,
    #[serde(default)]
    pub mileage_remaining: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_vin: Option<String>,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    #[serde(default)]
    pub installed_part_id: Option<i64>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub part_warranty_expiration_date: Option<String>,
    #[serde(default)]
    pub part_days_remaining: Option<i64>,
    #[serde(default)]
    pub expiration_reasons: Option<String>,
    #[serde(default)]
    pub grace_period_days: Option<i64>,
}

impl WarrantyValidation {
    /// Local preview of the total a customer would pay: the server fee plus
    /// any extra cost entered on the form.
    pub fn preview_total(&self, extra_cost: f64) -> Option<f64> {
        if self.is_valid_for_free_warranty {
            return Some(0.0);
        }
        if !self.can_provide_paid_warranty {
            return None;
        }
        Some(self.estimated_warranty_fee.unwrap_or_default() + extra_cost.max(0.0))
    }
}
