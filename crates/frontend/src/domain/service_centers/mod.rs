pub mod api;
pub mod mirror;
pub mod service;
pub mod ui;

pub use service::{ServiceCentersService, SERVICE_CENTERS_BANNER};
