use contracts::domain::feedback::Feedback;
use contracts::enums::FeedbackStatus;
use serde_json::{Map, Value};

use crate::shared::date_utils::now_rfc3339;
use crate::shared::mirror::MirrorRecord;

pub const STORAGE_KEY: &str = "mock_feedback";

impl MirrorRecord for Feedback {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn decode_stored(raw: &Value) -> Option<Self> {
        raw.is_object().then(|| Feedback::from_stored(raw))
    }
}

pub fn seed() -> Vec<Feedback> {
    let now = now_rfc3339();
    [
        (1, "Nguyễn Văn A", "a@example.com", "Dịch vụ rất tốt!"),
        (2, "Trần Thị B", "b@example.com", "Cần hỗ trợ tra cứu claim."),
    ]
    .into_iter()
    .map(|(id, customer_name, email, message)| Feedback {
        id,
        customer_name: customer_name.to_string(),
        email: email.to_string(),
        created_at: Some(now.clone()),
        message: message.to_string(),
        status: FeedbackStatus::New,
        rating: None,
        last_reply: None,
        replied_at: None,
        extra: Map::new(),
    })
    .collect()
}
