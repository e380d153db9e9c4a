pub mod api;

pub use api::WorkLogsApi;
