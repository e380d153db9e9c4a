use contracts::domain::work_log::{WorkLog, WorkLogPayload};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/work-logs";

/// Technician work logs. Start and end times are also stamped server-side
/// by the claim `tech-start` / `tech-complete` transitions.
pub type WorkLogsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<WorkLog, WorkLogPayload, T, S, N>;

impl<T, S, N> WorkLogsApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    pub async fn by_claim(
        &self,
        claim_id: i64,
        query: &ListQuery,
    ) -> Result<PageEnvelope<WorkLog>, FetchError> {
        self.list_at(format!("by-claim/{}", claim_id), query).await
    }

    pub async fn by_technician(
        &self,
        user_id: i64,
        query: &ListQuery,
    ) -> Result<PageEnvelope<WorkLog>, FetchError> {
        self.list_at(format!("by-technician/{}", user_id), query).await
    }

    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<WorkLog>, FetchError> {
        self.list_at("my-logs", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use serde_json::json;

    type Api = WorkLogsApi<StubTransport, MemoryStorage, RecordingNavigator>;

    #[tokio::test]
    async fn test_filtered_lists() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({"content": [{"workLogId": 1, "warrantyClaimId": 101, "userId": 8, "description": "Thay cell pin"}]}),
        );
        transport.push_json(200, json!([]));
        transport.push_json(200, json!([]));
        let api = Api::new(client);

        let by_claim = api.by_claim(101, &ListQuery::default()).await.unwrap();
        api.by_technician(8, &ListQuery::default()).await.unwrap();
        api.mine(&ListQuery::default()).await.unwrap();

        assert_eq!(by_claim.content[0].user_id, Some(8));
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/api/work-logs/by-claim/101?page=0&size=50",
                "http://api.test/api/work-logs/by-technician/8?page=0&size=50",
                "http://api.test/api/work-logs/my-logs?page=0&size=50",
            ]
        );
    }
}
