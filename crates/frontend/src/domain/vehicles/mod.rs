pub mod api;

pub use api::VehiclesApi;
