pub mod feedback_status;
pub mod part_request_status;
pub mod recall_status;
pub mod user_role;
pub mod warranty_claim_status;
pub mod warranty_status;

pub use feedback_status::FeedbackStatus;
pub use part_request_status::PartRequestStatus;
pub use recall_status::RecallStatus;
pub use user_role::UserRole;
pub use warranty_claim_status::WarrantyClaimStatus;
pub use warranty_status::WarrantyStatus;
