pub mod api;

pub use api::InstalledPartsApi;
