use contracts::domain::recall_response::{RecallResponse, RecallResponseConfirmation};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/recall-responses";

/// Customer answers to recall campaigns. Responses are created server-side
/// when a recall is approved, so the payload type is unit.
pub type RecallResponsesApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<RecallResponse, (), T, S, N>;

impl<T, S, N> RecallResponsesApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    pub async fn confirm(
        &self,
        id: i64,
        confirmation: &RecallResponseConfirmation,
    ) -> Result<(), FetchError> {
        self.client()
            .patch(&self.path(format!("{}/confirm", id)), confirmation)
            .await?;
        Ok(())
    }

    pub async fn by_campaign(
        &self,
        recall_request_id: i64,
        query: &ListQuery,
    ) -> Result<PageEnvelope<RecallResponse>, FetchError> {
        self.list_at(format!("campaign/{}", recall_request_id), query).await
    }

    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<RecallResponse>, FetchError> {
        self.list_at("my-responses", query).await
    }
}
