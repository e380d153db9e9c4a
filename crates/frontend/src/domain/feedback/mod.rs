pub mod api;
pub mod mirror;
pub mod service;
pub mod ui;

pub use service::{FeedbackService, FEEDBACK_BANNER};
