use std::fmt::Display;
use std::marker::PhantomData;

use contracts::shared::page::{ListQuery, PageEnvelope};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::{ApiClient, ApiResponse};
use super::error::FetchError;
use super::transport::{GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

/// CRUD endpoints of one REST collection (`GET/POST base`,
/// `GET/PUT/DELETE base/{id}`).
///
/// `R` is the record the server returns, `P` the payload it accepts.
/// Collections with extra endpoints add them through an inherent impl on
/// their own alias of this type.
#[derive(Debug, Clone)]
pub struct ResourceApi<R, P, T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
    base: &'static str,
    _marker: PhantomData<fn() -> (R, P)>,
}

impl<R, P, T, S, N> ResourceApi<R, P, T, S, N>
where
    R: DeserializeOwned,
    P: Serialize,
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn at(client: ApiClient<T, S, N>, base: &'static str) -> Self {
        Self {
            client,
            base,
            _marker: PhantomData,
        }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn client(&self) -> &ApiClient<T, S, N> {
        &self.client
    }

    /// `base/{suffix}`
    pub fn path(&self, suffix: impl Display) -> String {
        format!("{}/{}", self.base, suffix)
    }

    pub async fn list(&self, query: &ListQuery) -> Result<PageEnvelope<R>, FetchError> {
        self.client.page(self.base, query).await
    }

    pub async fn get(&self, id: impl Display) -> Result<R, FetchError> {
        self.client.get_json(&self.path(id)).await
    }

    /// Returns the created record when the server echoes one back.
    pub async fn create(&self, payload: &P) -> Result<Option<R>, FetchError> {
        let response = self.client.post(self.base, payload).await?;
        Ok(echoed(response))
    }

    pub async fn update(&self, id: impl Display, payload: &P) -> Result<Option<R>, FetchError> {
        let response = self.client.put(&self.path(id), payload).await?;
        Ok(echoed(response))
    }

    pub async fn remove(&self, id: impl Display) -> Result<(), FetchError> {
        self.client.delete(&self.path(id)).await?;
        Ok(())
    }

    /// Paged list under a sub-path such as `by-vehicle/{id}` or `my-claims`.
    pub async fn list_at(
        &self,
        suffix: impl Display,
        query: &ListQuery,
    ) -> Result<PageEnvelope<R>, FetchError> {
        self.client.page(&self.path(suffix), query).await
    }
}

fn echoed<R: DeserializeOwned>(response: ApiResponse) -> Option<R> {
    let data = response.data?;
    match serde_json::from_value(data) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("Ignoring undecodable echo: {}", e);
            None
        }
    }
}
