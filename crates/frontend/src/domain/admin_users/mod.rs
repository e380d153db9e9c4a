pub mod api;

pub use api::AdminUsersApi;
