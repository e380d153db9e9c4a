use contracts::domain::service_center::ServiceCenter;
use serde_json::{Map, Value};

use crate::shared::mirror::MirrorRecord;

pub const STORAGE_KEY: &str = "mock_service_centers";

impl MirrorRecord for ServiceCenter {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn decode_stored(raw: &Value) -> Option<Self> {
        raw.is_object().then(|| ServiceCenter::from_stored(raw))
    }
}

pub fn seed() -> Vec<ServiceCenter> {
    [
        (
            1,
            "Trung tâm dịch vụ Hà Nội",
            "123 Đường ABC, Hà Nội",
            "024-123456",
            21.0278,
            105.8342,
        ),
        (
            2,
            "Trung tâm dịch vụ TP.HCM",
            "456 Đường XYZ, TP.HCM",
            "028-654321",
            10.8231,
            106.6297,
        ),
    ]
    .into_iter()
    .map(|(id, name, address, phone, latitude, longitude)| ServiceCenter {
        id,
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        opening_hours: "08:00 - 17:00".to_string(),
        latitude,
        longitude,
        extra: Map::new(),
    })
    .collect()
}
