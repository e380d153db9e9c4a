pub mod api;

pub use api::RecallRequestsApi;
