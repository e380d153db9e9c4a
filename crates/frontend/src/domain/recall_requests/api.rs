use contracts::domain::recall_request::{CustomerRecallDecision, RecallRequest, RecallRequestPayload};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/recall-requests";

/// Recall requests. There is no plain collection listing; admins read
/// [`for_admin`](Self::for_admin), customers [`mine`](Self::mine).
pub type RecallRequestsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<RecallRequest, RecallRequestPayload, T, S, N>;

impl<T, S, N> RecallRequestsApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    /// The admin note travels in the query string, the body stays empty.
    pub async fn approve(&self, id: i64, note: &str) -> Result<(), FetchError> {
        self.decide(id, "approve", note).await
    }

    pub async fn reject(&self, id: i64, reason: &str) -> Result<(), FetchError> {
        self.decide(id, "reject", reason).await
    }

    async fn decide(&self, id: i64, action: &str, note: &str) -> Result<(), FetchError> {
        let path = self.path(format!(
            "{}/{}?note={}",
            id,
            action,
            urlencoding::encode(note.trim())
        ));
        self.client().patch_empty(&path).await?;
        Ok(())
    }

    pub async fn customer_confirm(
        &self,
        id: i64,
        decision: &CustomerRecallDecision,
    ) -> Result<(), FetchError> {
        self.client()
            .patch(&self.path(format!("{}/customer-confirm", id)), decision)
            .await?;
        Ok(())
    }

    pub async fn for_admin(&self, query: &ListQuery) -> Result<PageEnvelope<RecallRequest>, FetchError> {
        self.list_at("admin", query).await
    }

    pub async fn by_customer(
        &self,
        customer_id: &str,
        query: &ListQuery,
    ) -> Result<PageEnvelope<RecallRequest>, FetchError> {
        self.list_at(format!("customer/{}", urlencoding::encode(customer_id)), query)
            .await
    }

    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<RecallRequest>, FetchError> {
        self.list_at("my-recalls", query).await
    }
}
