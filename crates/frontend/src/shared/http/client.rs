use contracts::shared::page::{normalize_list, page_from_value, ListQuery, PageEnvelope};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::FetchError;
use super::transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::shared::api_utils::ApiConfig;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator, SessionStore};

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    /// Extra headers; they override the defaults except `Authorization`
    pub headers: Vec<(String, String)>,
    /// Leave the session and location alone on 401/403
    pub suppress_auth_redirect: bool,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn suppress_auth_redirect(mut self) -> Self {
        self.suppress_auth_redirect = true;
        self
    }
}

/// Parsed body plus the raw response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// `None` when the response was not JSON or could not be parsed
    pub data: Option<Value>,
    pub response: HttpResponse,
}

impl ApiResponse {
    pub fn json<R: DeserializeOwned>(self) -> Result<R, FetchError> {
        serde_json::from_value(self.data.unwrap_or(Value::Null))
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// List items whether the body is a bare array or a page envelope;
    /// any other shape yields no items.
    pub fn items(self) -> Vec<Value> {
        match normalize_list(self.data.unwrap_or(Value::Null)) {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }

    pub fn page(&self) -> PageEnvelope<Value> {
        self.data
            .as_ref()
            .map(page_from_value)
            .unwrap_or_else(|| PageEnvelope::single(Vec::new()))
    }
}

/// Authenticated JSON client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    config: ApiConfig,
    transport: T,
    session: SessionStore<S>,
    navigator: N,
}

impl ApiClient {
    /// Client wired to `fetch`, `localStorage` and `window.location`.
    pub fn browser() -> Self {
        Self::new(
            ApiConfig::default(),
            GlooTransport,
            SessionStore::new(BrowserStorage),
            BrowserNavigator,
        )
    }
}

impl<T, S, N> ApiClient<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(config: ApiConfig, transport: T, session: SessionStore<S>, navigator: N) -> Self {
        Self {
            config,
            transport,
            session,
            navigator,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Performs one round trip against `base_url + path`.
    ///
    /// Transport failures, 401/403 and other non-2xx statuses come back as
    /// the matching [`FetchError`] variant. A 401/403 also clears the stored
    /// session and redirects to the login route unless
    /// `suppress_auth_redirect` is set; no redirect is issued when the
    /// current path is already under the login route.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, FetchError> {
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| FetchError::Encode(e.to_string()))?;

        let request = HttpRequest {
            method: options.method,
            url: self.config.url(path),
            headers: self.build_headers(&options.headers),
            body,
        };
        let method = request.method;

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            FetchError::Transport {
                message: e.to_string(),
            }
        })?;

        let is_auth_failure = matches!(response.status, 401 | 403);
        if is_auth_failure && !options.suppress_auth_redirect {
            self.handle_auth_failure();
        }

        let data = parse_json_safe(&response);

        if !response.ok() {
            let message = error_message(&response, data.as_ref());
            log::warn!("{} {} -> {}: {}", method.as_str(), path, response.status, message);
            let status = response.status;
            return Err(if is_auth_failure {
                FetchError::Unauthorized {
                    status,
                    data,
                    message,
                }
            } else {
                FetchError::Status {
                    status,
                    data,
                    message,
                }
            });
        }

        Ok(ApiResponse { data, response })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Get)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Post).body(to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Put).body(to_value(body)?))
            .await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Patch).body(to_value(body)?))
            .await
    }

    /// PATCH without a body (claim workflow transitions)
    pub async fn patch_empty(&self, path: &str) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Patch)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, FetchError> {
        self.request(path, RequestOptions::new(HttpMethod::Delete)).await
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, FetchError> {
        self.get(path).await?.json()
    }

    /// Raw list items of `path?query`, envelope or bare array alike.
    pub async fn list_values(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Vec<Value>, FetchError> {
        Ok(self.get(&with_query(path, query)?).await?.items())
    }

    /// List of `path?query` with every item passed through `normalize`.
    pub async fn list<R>(
        &self,
        path: &str,
        query: &ListQuery,
        normalize: impl Fn(&Value) -> R,
    ) -> Result<Vec<R>, FetchError> {
        let items = self.list_values(path, query).await?;
        Ok(items.iter().map(normalize).collect())
    }

    /// Typed page of `path?query`; items that do not decode are skipped.
    pub async fn page<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<PageEnvelope<R>, FetchError> {
        let page = self.get(&with_query(path, query)?).await?.page();
        let decoded = page.map(|item| match serde_json::from_value::<R>(item) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Skipping undecodable item from {}: {}", path, e);
                None
            }
        });
        Ok(PageEnvelope {
            content: decoded.content.into_iter().flatten().collect(),
            total_elements: decoded.total_elements,
            total_pages: decoded.total_pages,
            page: decoded.page,
            size: decoded.size,
            first: decoded.first,
            last: decoded.last,
        })
    }

    fn build_headers(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            (self.config.tunnel_bypass_header.clone(), "true".to_string()),
        ];
        for (name, value) in extra {
            headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        if let Some(token) = self.session.token() {
            headers.retain(|(k, _)| !k.eq_ignore_ascii_case("Authorization"));
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    fn handle_auth_failure(&self) {
        log::info!("Session rejected by the server, clearing stored credentials");
        self.session.clear();
        let login = self.config.login_route.as_str();
        if !self.navigator.current_path().starts_with(login) {
            self.navigator.redirect(login);
        }
    }
}

/// Appends the serialized list query to `path`.
pub fn with_query(path: &str, query: &ListQuery) -> Result<String, FetchError> {
    let qs = serde_qs::to_string(query).map_err(|e| FetchError::Encode(e.to_string()))?;
    Ok(if qs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, qs)
    })
}

fn to_value<B: Serialize + ?Sized>(body: &B) -> Result<Value, FetchError> {
    serde_json::to_value(body).map_err(|e| FetchError::Encode(e.to_string()))
}

fn parse_json_safe(response: &HttpResponse) -> Option<Value> {
    if !response.is_json() {
        return None;
    }
    serde_json::from_str(&response.body).ok()
}

/// `message`, then `error` from a JSON body; raw text when the response did
/// not claim to be JSON; finally `"{status} {status_text}"`. A body labelled
/// JSON that fails to parse is never echoed back.
fn error_message(response: &HttpResponse, data: Option<&Value>) -> String {
    let from_json = data.and_then(|d| {
        ["message", "error"]
            .iter()
            .find_map(|key| d.get(key).and_then(Value::as_str))
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    });
    if let Some(message) = from_json {
        return message;
    }
    if !response.is_json() && !response.body.trim().is_empty() {
        return response.body.clone();
    }
    format!("{} {}", response.status, response.status_text)
        .trim_end()
        .to_string()
}
