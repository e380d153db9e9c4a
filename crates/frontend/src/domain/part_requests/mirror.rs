use contracts::domain::part_request::PartRequest;
use contracts::enums::PartRequestStatus;
use serde_json::{Map, Value};

use crate::shared::date_utils::now_rfc3339;
use crate::shared::mirror::MirrorRecord;

pub const STORAGE_KEY: &str = "mock_part_requests";

impl MirrorRecord for PartRequest {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn decode_stored(raw: &Value) -> Option<Self> {
        raw.is_object().then(|| PartRequest::from_stored(raw))
    }
}

pub fn seed() -> Vec<PartRequest> {
    let now = now_rfc3339();
    [
        (1, 101, "BAT-001", "Battery Pack", 1, PartRequestStatus::Pending),
        (2, 102, "MOT-002", "Electric Motor", 2, PartRequestStatus::Approved),
    ]
    .into_iter()
    .map(|(id, claim_id, part_id, part_name, quantity, status)| PartRequest {
        id,
        claim_id: Some(claim_id),
        part_id: part_id.to_string(),
        part_name: part_name.to_string(),
        quantity,
        status,
        requested_at: Some(now.clone()),
        service_center_name: None,
        rejection_reason: None,
        extra: Map::new(),
    })
    .collect()
}
