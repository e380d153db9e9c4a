use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::raw;

/// Authorized service center
///
/// Stored records use `opening_hours` (snake case) while the server DTO uses
/// `openingHours`; both are read by [`ServiceCenter::from_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCenter {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceCenter {
    /// Keys this record serializes under
    pub const FIELDS: &'static [&'static str] = &["id", "name", "address", "phone", "opening_hours", "latitude", "longitude"];

    /// Lenient read of a locally stored record. Null or mistyped fields fall
    /// back to their defaults and unnamed keys are kept in `extra`.
    pub fn from_stored(raw: &Value) -> Self {
        let mut record = Self::from_raw(raw);
        record.extra = raw::unknown_fields(raw, Self::FIELDS);
        record
    }

    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: raw::i64_field(raw, &["service_center_id", "serviceCenterId", "id"])
                .unwrap_or_default(),
            name: raw::string_field(raw, &["name", "serviceCenterName"]).unwrap_or_default(),
            address: raw::string_field(raw, &["address"]).unwrap_or_default(),
            phone: raw::string_field(raw, &["phone"]).unwrap_or_default(),
            opening_hours: raw::string_field(raw, &["opening_hours", "openingHours"])
                .unwrap_or_default(),
            latitude: raw::f64_field(raw, &["latitude"]).unwrap_or_default(),
            longitude: raw::f64_field(raw, &["longitude"]).unwrap_or_default(),
            extra: Map::new(),
        }
    }

    /// Overwrites every editable field with the payload values.
    pub fn apply(&mut self, payload: &ServiceCenterPayload) {
        self.name = payload.name.clone();
        self.address = payload.address.clone();
        self.phone = payload.phone.clone();
        self.opening_hours = payload.opening_hours.clone();
        self.latitude = payload.latitude;
        self.longitude = payload.longitude;
    }

    pub fn from_payload(id: i64, payload: &ServiceCenterPayload) -> Self {
        let mut center = Self {
            id,
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            opening_hours: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            extra: Map::new(),
        };
        center.apply(payload);
        center
    }
}

/// Body of create/update requests; coordinates are already numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCenterPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw text typed into the service center form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCenterForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub latitude: String,
    pub longitude: String,
}

impl ServiceCenterForm {
    /// Pre-fills the form from an existing record.
    pub fn from_center(center: &ServiceCenter) -> Self {
        Self {
            name: center.name.clone(),
            address: center.address.clone(),
            phone: center.phone.clone(),
            opening_hours: center.opening_hours.clone(),
            latitude: format_coordinate(center.latitude),
            longitude: format_coordinate(center.longitude),
        }
    }

    /// Coerces the coordinate text to numbers. Blank text becomes `0`;
    /// text that is not a number also becomes `0` and is reported in the
    /// returned list of offending field names.
    pub fn to_payload(&self) -> (ServiceCenterPayload, Vec<&'static str>) {
        let mut invalid = Vec::new();
        let mut coord = |text: &str, field: &'static str| {
            raw::coerce_number(text).unwrap_or_else(|| {
                invalid.push(field);
                0.0
            })
        };
        let latitude = coord(&self.latitude, "latitude");
        let longitude = coord(&self.longitude, "longitude");
        (
            ServiceCenterPayload {
                name: self.name.trim().to_string(),
                address: self.address.trim().to_string(),
                phone: self.phone.trim().to_string(),
                opening_hours: self.opening_hours.trim().to_string(),
                latitude,
                longitude,
            },
            invalid,
        )
    }
}

fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_aliases() {
        let raw = json!({
            "serviceCenterId": 8,
            "serviceCenterName": "Trung tâm Cần Thơ",
            "openingHours": "07:30 - 18:00",
            "latitude": "10.0452",
            "longitude": 105.7469
        });
        let center = ServiceCenter::from_raw(&raw);
        assert_eq!(center.id, 8);
        assert_eq!(center.name, "Trung tâm Cần Thơ");
        assert_eq!(center.opening_hours, "07:30 - 18:00");
        assert_eq!(center.latitude, 10.0452);
        assert_eq!(center.longitude, 105.7469);
    }

    #[test]
    fn test_form_coercion() {
        let form = ServiceCenterForm {
            name: " HN ".into(),
            latitude: "21.5".into(),
            longitude: "".into(),
            ..Default::default()
        };
        let (payload, invalid) = form.to_payload();
        assert_eq!(payload.name, "HN");
        assert_eq!(payload.latitude, 21.5);
        assert_eq!(payload.longitude, 0.0);
        assert!(invalid.is_empty());

        let form = ServiceCenterForm {
            latitude: "north".into(),
            ..Default::default()
        };
        let (payload, invalid) = form.to_payload();
        assert_eq!(payload.latitude, 0.0);
        assert_eq!(invalid, vec!["latitude"]);
    }

    #[test]
    fn test_stored_shape_uses_snake_case_hours() {
        let center = ServiceCenter::from_payload(
            3,
            &ServiceCenterPayload {
                name: "A".into(),
                address: "B".into(),
                phone: "C".into(),
                opening_hours: "08:00 - 17:00".into(),
                latitude: 1.0,
                longitude: 2.0,
            },
        );
        let value = serde_json::to_value(&center).unwrap();
        assert_eq!(value["opening_hours"], json!("08:00 - 17:00"));
        assert_eq!(value["id"], json!(3));
    }
}
