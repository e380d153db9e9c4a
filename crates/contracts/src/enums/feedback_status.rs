use serde::{Deserialize, Serialize};

/// Feedback processing state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    #[default]
    New,
    Replied,
    Closed,
}

impl FeedbackStatus {
    pub fn code(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "NEW",
            FeedbackStatus::Replied => "REPLIED",
            FeedbackStatus::Closed => "CLOSED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "Mới",
            FeedbackStatus::Replied => "Đã trả lời",
            FeedbackStatus::Closed => "Đã đóng",
        }
    }

    pub fn all() -> Vec<FeedbackStatus> {
        vec![
            FeedbackStatus::New,
            FeedbackStatus::Replied,
            FeedbackStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NEW" => Some(FeedbackStatus::New),
            "REPLIED" => Some(FeedbackStatus::Replied),
            "CLOSED" => Some(FeedbackStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
