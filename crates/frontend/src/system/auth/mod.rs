pub mod guard;
pub mod navigator;
pub mod storage;

pub use guard::{role_allowed, RequireRole};
pub use navigator::{BrowserNavigator, Navigator};
pub use storage::SessionStore;
