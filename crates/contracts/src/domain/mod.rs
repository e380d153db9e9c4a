pub mod admin_user;
pub mod customer;
pub mod feedback;
pub mod installed_part;
pub mod part;
pub mod part_category;
pub mod part_request;
pub mod recall_request;
pub mod recall_response;
pub mod service_center;
pub mod service_history;
pub mod vehicle;
pub mod warranty_claim;
pub mod warranty_validation;
pub mod work_log;
