//! API configuration and URL helpers.
//!
//! The browser has no runtime environment, so the base URL override is
//! baked in at build time from `API_BASE_URL`.

use contracts::shared::page::ListQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_route: String,
    /// Header that tells the tunnelling proxy in front of the API to skip its
    /// browser interstitial page
    pub tunnel_bypass_header: String,
    pub default_page_size: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
base_url = "https://backend.bluecloudk.xyz"
login_route = "/login"
tunnel_bypass_header = "ngrok-skip-browser-warning"
default_page_size = 50
"#;

impl ApiConfig {
    /// Embedded defaults with the build-time `API_BASE_URL` override applied.
    pub fn load() -> Result<Self, toml::de::Error> {
        let mut config: ApiConfig = toml::from_str(DEFAULT_CONFIG)?;
        config.base_url = resolve_base_url(option_env!("API_BASE_URL"), &config.base_url);
        log::debug!("API base url: {}", config.base_url);
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = resolve_base_url(Some(base_url), &self.base_url);
        self
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    /// First page at the configured page size.
    pub fn list_query(&self) -> ListQuery {
        ListQuery::new(0, self.default_page_size)
    }

    /// Joins the base URL and an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::error!("Embedded API config is invalid: {}", e);
            Self {
                base_url: "https://backend.bluecloudk.xyz".to_string(),
                login_route: "/login".to_string(),
                tunnel_bypass_header: "ngrok-skip-browser-warning".to_string(),
                default_page_size: 50,
            }
        })
    }
}

/// Picks the override when it is non-blank, otherwise the fallback; the result
/// is trimmed and has trailing slashes removed.
pub fn resolve_base_url(override_url: Option<&str>, fallback: &str) -> String {
    let chosen = override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| fallback.trim());
    chosen.trim_end_matches('/').to_string()
}
