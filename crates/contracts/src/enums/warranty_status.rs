use serde::{Deserialize, Serialize};

/// Warranty coverage verdict computed by the server for a vehicle or part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarrantyStatus {
    Valid,
    ExpiredDate,
    ExpiredMileage,
    ExpiredBoth,
    PartWarrantyExpired,
}

impl WarrantyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WarrantyStatus::Valid => "VALID",
            WarrantyStatus::ExpiredDate => "EXPIRED_DATE",
            WarrantyStatus::ExpiredMileage => "EXPIRED_MILEAGE",
            WarrantyStatus::ExpiredBoth => "EXPIRED_BOTH",
            WarrantyStatus::PartWarrantyExpired => "PART_WARRANTY_EXPIRED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WarrantyStatus::Valid => "Còn trong thời hạn bảo hành",
            WarrantyStatus::ExpiredDate => "Hết hạn bảo hành theo thời gian",
            WarrantyStatus::ExpiredMileage => "Hết hạn bảo hành theo số km đã đi",
            WarrantyStatus::ExpiredBoth => "Hết hạn bảo hành cả theo thời gian và số km",
            WarrantyStatus::PartWarrantyExpired => "Linh kiện đã hết hạn bảo hành",
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, WarrantyStatus::Valid)
    }
}
