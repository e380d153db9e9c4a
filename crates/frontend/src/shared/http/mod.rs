//! JSON-over-HTTP client for the warranty REST API.

pub mod client;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::{with_query, ApiClient, ApiResponse, RequestOptions};
pub use error::{FetchError, FetchErrorKind};
pub use resource::ResourceApi;
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
