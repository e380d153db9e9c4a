//! One module per REST resource. Feedback, part requests and service
//! centers carry a local mirror and admin pages; the rest are API-only.

pub mod admin_users;
pub mod customers;
pub mod feedback;
pub mod installed_parts;
pub mod part_categories;
pub mod part_requests;
pub mod parts;
pub mod recall_requests;
pub mod recall_responses;
pub mod service_centers;
pub mod service_histories;
pub mod vehicles;
pub mod warranty_claims;
pub mod warranty_validation;
pub mod work_logs;
