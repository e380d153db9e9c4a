use serde::{Deserialize, Serialize};

/// Lifecycle of a recall request, from EVM creation to the resulting claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecallStatus {
    PendingAdminApproval,
    RejectedByAdmin,
    WaitingCustomerConfirm,
    AcceptedByCustomer,
    RejectedByCustomer,
    ClaimCreated,
    Completed,
}

impl RecallStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecallStatus::PendingAdminApproval => "PENDING_ADMIN_APPROVAL",
            RecallStatus::RejectedByAdmin => "REJECTED_BY_ADMIN",
            RecallStatus::WaitingCustomerConfirm => "WAITING_CUSTOMER_CONFIRM",
            RecallStatus::AcceptedByCustomer => "ACCEPTED_BY_CUSTOMER",
            RecallStatus::RejectedByCustomer => "REJECTED_BY_CUSTOMER",
            RecallStatus::ClaimCreated => "CLAIM_CREATED",
            RecallStatus::Completed => "COMPLETED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecallStatus::PendingAdminApproval => "Chờ duyệt",
            RecallStatus::RejectedByAdmin => "Admin từ chối",
            RecallStatus::WaitingCustomerConfirm => "Chờ khách hàng",
            RecallStatus::AcceptedByCustomer => "Khách đã chấp nhận",
            RecallStatus::RejectedByCustomer => "Khách từ chối",
            RecallStatus::ClaimCreated => "Đã tạo claim",
            RecallStatus::Completed => "Hoàn thành",
        }
    }

    pub fn all() -> Vec<RecallStatus> {
        vec![
            RecallStatus::PendingAdminApproval,
            RecallStatus::RejectedByAdmin,
            RecallStatus::WaitingCustomerConfirm,
            RecallStatus::AcceptedByCustomer,
            RecallStatus::RejectedByCustomer,
            RecallStatus::ClaimCreated,
            RecallStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Only requests still awaiting the admin can be approved or rejected.
    pub fn is_pending_admin(&self) -> bool {
        *self == RecallStatus::PendingAdminApproval
    }
}

impl std::fmt::Display for RecallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_names() {
        for status in RecallStatus::all() {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, serde_json::json!(status.code()));
            assert_eq!(RecallStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RecallStatus::from_code("IN_REVIEW"), None);
    }
}
