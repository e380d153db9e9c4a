pub mod api;
pub mod mirror;
pub mod service;
pub mod ui;

pub use service::{PartRequestsService, PART_REQUESTS_BANNER};
