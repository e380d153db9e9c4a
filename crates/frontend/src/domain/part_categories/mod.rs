pub mod api;

pub use api::PartCategoriesApi;
