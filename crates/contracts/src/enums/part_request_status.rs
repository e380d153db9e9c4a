use serde::{Deserialize, Serialize};

/// State of a technician's request for a replacement part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartRequestStatus {
    #[default]
    Pending,
    Approved,
    Shipped,
    Delivered,
    Rejected,
    Cancelled,
}

impl PartRequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PartRequestStatus::Pending => "PENDING",
            PartRequestStatus::Approved => "APPROVED",
            PartRequestStatus::Shipped => "SHIPPED",
            PartRequestStatus::Delivered => "DELIVERED",
            PartRequestStatus::Rejected => "REJECTED",
            PartRequestStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartRequestStatus::Pending => "Chờ duyệt",
            PartRequestStatus::Approved => "Đã duyệt",
            PartRequestStatus::Shipped => "Đang vận chuyển",
            PartRequestStatus::Delivered => "Đã giao",
            PartRequestStatus::Rejected => "Từ chối",
            PartRequestStatus::Cancelled => "Đã hủy",
        }
    }

    pub fn all() -> Vec<PartRequestStatus> {
        vec![
            PartRequestStatus::Pending,
            PartRequestStatus::Approved,
            PartRequestStatus::Shipped,
            PartRequestStatus::Delivered,
            PartRequestStatus::Rejected,
            PartRequestStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Approve/reject actions are only offered while the request is pending.
    pub fn is_open(&self) -> bool {
        matches!(self, PartRequestStatus::Pending)
    }
}

impl std::fmt::Display for PartRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
