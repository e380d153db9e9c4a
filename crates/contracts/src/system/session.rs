//! Keys under which the browser session is persisted.

/// Bearer token issued at login
pub const TOKEN_KEY: &str = "token";

/// Role code of the logged-in user (see [`crate::enums::UserRole`])
pub const ROLE_KEY: &str = "role";

/// All keys removed when the session is invalidated
pub const SESSION_KEYS: [&str; 2] = [TOKEN_KEY, ROLE_KEY];
