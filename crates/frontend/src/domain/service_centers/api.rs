use contracts::domain::service_center::{ServiceCenter, ServiceCenterPayload};
use contracts::shared::page::ListQuery;

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/service-centers";

#[derive(Debug, Clone)]
pub struct ServiceCentersApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
}

impl<T, S, N> ServiceCentersApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<ServiceCenter>, FetchError> {
        self.client.list(BASE, query, ServiceCenter::from_raw).await
    }

    pub async fn get(&self, id: i64) -> Result<ServiceCenter, FetchError> {
        let response = self.client.get(&format!("{}/{}", BASE, id)).await?;
        Ok(ServiceCenter::from_raw(
            response.data.as_ref().unwrap_or(&serde_json::Value::Null),
        ))
    }

    pub async fn create(&self, payload: &ServiceCenterPayload) -> Result<(), FetchError> {
        self.client.post(BASE, payload).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &ServiceCenterPayload) -> Result<(), FetchError> {
        self.client.put(&format!("{}/{}", BASE, id), payload).await?;
        Ok(())
    }

    pub async fn remove(&self, id: i64) -> Result<(), FetchError> {
        self.client.delete(&format!("{}/{}", BASE, id)).await?;
        Ok(())
    }
}
