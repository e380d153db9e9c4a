//! Remote-first calls that may fall back to the local mirror.
//!
//! The decision is taken once per call from the error kind
//! ([`FetchError::allows_mock_fallback`]); the mode is never remembered
//! between calls.

use std::future::Future;

use crate::shared::http::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Mirror,
}

/// Value together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: DataSource,
    /// Banner text when the value is mirror data
    pub warning: Option<String>,
}

impl<T> Loaded<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            source: DataSource::Remote,
            warning: None,
        }
    }

    pub fn mirror(value: T, warning: impl Into<String>) -> Self {
        Self {
            value,
            source: DataSource::Mirror,
            warning: Some(warning.into()),
        }
    }

    pub fn is_mirror(&self) -> bool {
        self.source == DataSource::Mirror
    }
}

/// Result of a create/update/delete
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<R> {
    /// The server accepted it; the caller reloads
    Remote,
    /// Applied to the mirror instead; the full mirrored collection
    Mirrored(Vec<R>),
}

impl<R> MutationOutcome<R> {
    pub fn is_mirrored(&self) -> bool {
        matches!(self, MutationOutcome::Mirrored(_))
    }
}

/// Runs `remote`; on an error that allows fallback, answers with
/// `mirror()` and `warning` instead.
pub async fn load_or_mirror<T, Fut>(
    remote: Fut,
    mirror: impl FnOnce() -> T,
    warning: &str,
) -> Result<Loaded<T>, FetchError>
where
    Fut: Future<Output = Result<T, FetchError>>,
{
    match remote.await {
        Ok(value) => Ok(Loaded::remote(value)),
        Err(e) if e.allows_mock_fallback() => {
            log::warn!("Falling back to local mirror: {}", e);
            Ok(Loaded::mirror(mirror(), warning))
        }
        Err(e) => Err(e),
    }
}

/// Runs `remote`; on an error that allows fallback, applies `mirror()` to
/// the local collection and returns the result.
pub async fn mutate_or_mirror<R, T, Fut>(
    remote: Fut,
    mirror: impl FnOnce() -> Vec<R>,
) -> Result<MutationOutcome<R>, FetchError>
where
    Fut: Future<Output = Result<T, FetchError>>,
{
    match remote.await {
        Ok(_) => Ok(MutationOutcome::Remote),
        Err(e) if e.allows_mock_fallback() => {
            log::warn!("Remote mutation failed, applying to local mirror: {}", e);
            Ok(MutationOutcome::Mirrored(mirror()))
        }
        Err(e) => Err(e),
    }
}
