pub mod api;

pub use api::WarrantyClaimsApi;
