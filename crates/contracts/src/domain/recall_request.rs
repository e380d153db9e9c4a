use serde::{Deserialize, Serialize};

use crate::enums::RecallStatus;

/// Recall raised by EVM staff against one installed part.
///
/// `status` stays a plain string so lifecycle states this build does not know
/// yet still decode; [`RecallRequest::recall_status`] gives the typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallRequest {
    pub recall_request_id: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub customer_note: Option<String>,
    #[serde(default)]
    pub installed_part: Option<RecalledPart>,
    #[serde(default)]
    pub created_by: Option<PersonRef>,
    #[serde(default)]
    pub approved_by: Option<PersonRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RecallRequest {
    pub fn recall_status(&self) -> Option<RecallStatus> {
        RecallStatus::from_code(&self.status)
    }

    /// `"model (vin)"` of the affected vehicle, when known
    pub fn vehicle_label(&self) -> Option<String> {
        let vehicle = self.installed_part.as_ref()?.vehicle.as_ref()?;
        match (&vehicle.model, &vehicle.vin) {
            (Some(model), Some(vin)) => Some(format!("{} ({})", model, vin)),
            (Some(model), None) => Some(model.clone()),
            (None, Some(vin)) => Some(vin.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalledPart {
    #[serde(default)]
    pub installed_part_id: Option<i64>,
    #[serde(default)]
    pub installation_date: Option<String>,
    #[serde(default)]
    pub vehicle: Option<RecalledVehicle>,
    #[serde(default)]
    pub part: Option<RecalledPartInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalledVehicle {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalledPartInfo {
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub part_number: Option<String>,
}

/// User summary embedded in recall records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Body of `POST /api/recall-requests`. The server takes the installed part
/// id as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallRequestPayload {
    pub installed_part_id: String,
    pub reason: String,
}

impl RecallRequestPayload {
    pub fn new(installed_part_id: i64, reason: &str) -> Self {
        Self {
            installed_part_id: installed_part_id.to_string(),
            reason: reason.trim().to_string(),
        }
    }
}

/// Body of `PATCH /api/recall-requests/{id}/customer-confirm`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecallDecision {
    pub accepted: bool,
    pub customer_note: Option<String>,
}

impl CustomerRecallDecision {
    /// Blank notes are sent as `null`.
    pub fn new(accepted: bool, note: &str) -> Self {
        let note = note.trim();
        Self {
            accepted,
            customer_note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}
