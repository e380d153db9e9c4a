use contracts::domain::service_history::{ServiceHistory, ServiceHistoryPayload};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/service-histories";

pub type ServiceHistoriesApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<ServiceHistory, ServiceHistoryPayload, T, S, N>;

impl<T, S, N> ServiceHistoriesApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    pub async fn by_vehicle(
        &self,
        vehicle_id: i64,
        query: &ListQuery,
    ) -> Result<PageEnvelope<ServiceHistory>, FetchError> {
        self.list_at(format!("by-vehicle/{}", vehicle_id), query).await
    }

    pub async fn by_customer(
        &self,
        customer_id: &str,
        query: &ListQuery,
    ) -> Result<PageEnvelope<ServiceHistory>, FetchError> {
        self.list_at(format!("by-customer/{}", urlencoding::encode(customer_id)), query)
            .await
    }

    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<ServiceHistory>, FetchError> {
        self.list_at("my-histories", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use serde_json::json;

    type Api = ServiceHistoriesApi<StubTransport, MemoryStorage, RecordingNavigator>;

    #[tokio::test]
    async fn test_crud_paths() {
        let (client, transport, _) = offline_client();
        transport.push_json(200, json!({"serviceHistoryId": 4, "serviceType": "Bảo dưỡng"}));
        transport.push_status(200);
        let api = Api::new(client);
        let payload = ServiceHistoryPayload {
            service_date: "2025-03-02".into(),
            service_type: "Bảo dưỡng".into(),
            description: "Kiểm tra pin định kỳ".into(),
            part_id: None,
            vehicle_id: 3,
        };

        let history = api.get(4).await.unwrap();
        api.update(4, &payload).await.unwrap();

        assert_eq!(history.service_type, "Bảo dưỡng");
        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/api/service-histories/4");
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].url, "http://api.test/api/service-histories/4");
    }

    #[tokio::test]
    async fn test_scoped_lists() {
        let (client, transport, _) = offline_client();
        transport.push_json(200, json!([]));
        transport.push_json(200, json!([]));
        let api = Api::new(client);

        api.by_customer("C 01", &ListQuery::new(1, 5)).await.unwrap();
        api.mine(&ListQuery::new(0, 5)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "http://api.test/api/service-histories/by-customer/C%2001?page=1&size=5"
        );
        assert_eq!(
            requests[1].url,
            "http://api.test/api/service-histories/my-histories?page=0&size=5"
        );
    }
}
