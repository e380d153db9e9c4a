use contracts::domain::feedback::{Feedback, FeedbackReply};
use contracts::enums::FeedbackStatus;
use contracts::shared::page::ListQuery;

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/feedbacks";

/// `/api/feedbacks` endpoints
#[derive(Debug, Clone)]
pub struct FeedbackApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
}

impl<T, S, N> FeedbackApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Feedback>, FetchError> {
        self.client.list(BASE, query, Feedback::from_raw).await
    }

    pub async fn get(&self, id: i64) -> Result<Feedback, FetchError> {
        let response = self.client.get(&format!("{}/{}", BASE, id)).await?;
        Ok(Feedback::from_raw(response.data.as_ref().unwrap_or(&serde_json::Value::Null)))
    }

    pub async fn reply(&self, id: i64, reply: &FeedbackReply) -> Result<(), FetchError> {
        self.client
            .post(&format!("{}/{}/reply", BASE, id), reply)
            .await?;
        Ok(())
    }

    /// The body is the bare status string, e.g. `"CLOSED"`.
    pub async fn update_status(&self, id: i64, status: FeedbackStatus) -> Result<(), FetchError> {
        self.client
            .patch(&format!("{}/{}/status", BASE, id), &status)
            .await?;
        Ok(())
    }
}
