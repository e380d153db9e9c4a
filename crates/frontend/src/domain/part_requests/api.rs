use contracts::domain::part_request::PartRequest;
use contracts::enums::PartRequestStatus;
use contracts::shared::page::ListQuery;

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/part-requests";

#[derive(Debug, Clone)]
pub struct PartRequestsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
}

impl<T, S, N> PartRequestsApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<PartRequest>, FetchError> {
        self.client.list(BASE, query, PartRequest::from_raw).await
    }

    pub async fn get(&self, id: i64) -> Result<PartRequest, FetchError> {
        let response = self.client.get(&format!("{}/{}", BASE, id)).await?;
        Ok(PartRequest::from_raw(
            response.data.as_ref().unwrap_or(&serde_json::Value::Null),
        ))
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: PartRequestStatus,
    ) -> Result<(), FetchError> {
        self.client
            .patch(&format!("{}/{}/status", BASE, id), &status)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offline_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_normalizes_dto() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({"requestId": 7, "faultyPartName": "Inverter", "status": "SHIPPED"}),
        );

        let request = PartRequestsApi::new(client).get(7).await.unwrap();

        assert_eq!(request.id, 7);
        assert_eq!(request.part_name, "Inverter");
        assert_eq!(request.status, PartRequestStatus::Shipped);
        assert_eq!(transport.requests()[0].url, "http://api.test/api/part-requests/7");
    }
}
