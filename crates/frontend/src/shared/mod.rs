pub mod api_utils;
pub mod date_utils;
pub mod dialog;
pub mod fallback;
pub mod http;
pub mod list_state;
pub mod list_utils;
pub mod lookup;
pub mod mirror;
pub mod storage;
