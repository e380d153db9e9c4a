use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::FeedbackStatus;
use crate::shared::raw;

/// Customer feedback as shown on the admin feedback screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: FeedbackStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<String>,

    /// Fields this model does not name, kept so they survive a rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feedback {
    /// Keys this record serializes under
    pub const FIELDS: &'static [&'static str] = &["id", "customerName", "email", "createdAt", "message", "status", "rating", "lastReply", "repliedAt"];

    /// Lenient read of a locally stored record. Null or mistyped fields fall
    /// back to their defaults and unnamed keys are kept in `extra`.
    pub fn from_stored(raw: &Value) -> Self {
        let mut record = Self::from_raw(raw);
        record.extra = raw::unknown_fields(raw, Self::FIELDS);
        record
    }

    /// Builds a record from either the stored shape or the server DTO
    /// (`feedbackId`, `comment`, nested `customer`).
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: raw::i64_field(raw, &["id", "feedbackId"]).unwrap_or_default(),
            customer_name: raw::string_field(raw, &["customerName", "customer.name"])
                .unwrap_or_default(),
            email: raw::string_field(raw, &["email", "customerEmail", "customer.user.email"])
                .unwrap_or_default(),
            created_at: raw::string_field(raw, &["createdAt"]),
            message: raw::string_field(raw, &["message", "comment"]).unwrap_or_default(),
            status: raw::string_field(raw, &["status"])
                .and_then(|s| FeedbackStatus::from_code(&s))
                .unwrap_or_default(),
            rating: raw::i64_field(raw, &["rating"]),
            last_reply: raw::string_field(raw, &["lastReply", "reply"]),
            replied_at: raw::string_field(raw, &["repliedAt"]),
            extra: Map::new(),
        }
    }
}

/// Body of `POST /api/feedbacks/{id}/reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_server_dto() {
        let raw = json!({
            "feedbackId": 12,
            "rating": 5,
            "comment": "Rất hài lòng",
            "createdAt": "2025-01-02T03:04:05",
            "customer": {"name": "Lê Văn C"}
        });
        let fb = Feedback::from_raw(&raw);
        assert_eq!(fb.id, 12);
        assert_eq!(fb.customer_name, "Lê Văn C");
        assert_eq!(fb.message, "Rất hài lòng");
        assert_eq!(fb.rating, Some(5));
        assert_eq!(fb.status, FeedbackStatus::New);
    }

    #[test]
    fn test_from_stored_defaults_nulls_and_unknown_status() {
        let stored = json!({
            "id": 7,
            "customerName": null,
            "message": "Xe sạc chậm",
            "status": "IN_REVIEW",
            "channel": "hotline"
        });
        assert!(serde_json::from_value::<Feedback>(stored.clone()).is_err());

        let fb = Feedback::from_stored(&stored);
        assert_eq!(fb.id, 7);
        assert_eq!(fb.customer_name, "");
        assert_eq!(fb.status, FeedbackStatus::New);
        assert_eq!(fb.extra.len(), 1);
        assert_eq!(fb.extra.get("channel"), Some(&json!("hotline")));
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let stored = json!({"id": 1, "message": "x", "status": "CLOSED", "channel": "email"});
        let fb: Feedback = serde_json::from_value(stored).unwrap();
        assert_eq!(fb.status, FeedbackStatus::Closed);
        assert_eq!(fb.extra.get("channel"), Some(&json!("email")));
        let back = serde_json::to_value(&fb).unwrap();
        assert_eq!(back["channel"], json!("email"));
    }
}
