use serde::{Deserialize, Serialize};

/// Warranty claim lifecycle.
///
/// Free warranty: `SUBMITTED -> MANAGER_REVIEW -> PROCESSING -> COMPLETED`.
/// Paid warranty inserts `PENDING_PAYMENT -> PAYMENT_CONFIRMED` after
/// `SUBMITTED`. Any state may move to `REJECTED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarrantyClaimStatus {
    #[default]
    Submitted,
    PendingPayment,
    PaymentConfirmed,
    ManagerReview,
    Processing,
    Completed,
    Rejected,
}

impl WarrantyClaimStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WarrantyClaimStatus::Submitted => "SUBMITTED",
            WarrantyClaimStatus::PendingPayment => "PENDING_PAYMENT",
            WarrantyClaimStatus::PaymentConfirmed => "PAYMENT_CONFIRMED",
            WarrantyClaimStatus::ManagerReview => "MANAGER_REVIEW",
            WarrantyClaimStatus::Processing => "PROCESSING",
            WarrantyClaimStatus::Completed => "COMPLETED",
            WarrantyClaimStatus::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WarrantyClaimStatus::Submitted => "Tiếp nhận",
            WarrantyClaimStatus::PendingPayment => "Chờ thanh toán",
            WarrantyClaimStatus::PaymentConfirmed => "Đã xác nhận thanh toán",
            WarrantyClaimStatus::ManagerReview => "Manager đang xem xét",
            WarrantyClaimStatus::Processing => "Đang xử lý",
            WarrantyClaimStatus::Completed => "Hoàn tất",
            WarrantyClaimStatus::Rejected => "Từ chối",
        }
    }

    pub fn all() -> Vec<WarrantyClaimStatus> {
        vec![
            WarrantyClaimStatus::Submitted,
            WarrantyClaimStatus::PendingPayment,
            WarrantyClaimStatus::PaymentConfirmed,
            WarrantyClaimStatus::ManagerReview,
            WarrantyClaimStatus::Processing,
            WarrantyClaimStatus::Completed,
            WarrantyClaimStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WarrantyClaimStatus::Completed | WarrantyClaimStatus::Rejected
        )
    }
}

impl std::fmt::Display for WarrantyClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
