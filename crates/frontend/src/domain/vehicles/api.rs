use contracts::domain::vehicle::{Vehicle, VehiclePayload};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/vehicles";

pub type VehiclesApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<Vehicle, VehiclePayload, T, S, N>;

impl<T, S, N> VehiclesApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    pub async fn by_customer(
        &self,
        customer_id: &str,
        query: &ListQuery,
    ) -> Result<PageEnvelope<Vehicle>, FetchError> {
        self.list_at(format!("by-customer/{}", urlencoding::encode(customer_id)), query)
            .await
    }

    /// Vehicles of the signed-in customer
    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<Vehicle>, FetchError> {
        self.list_at("my-vehicles", query).await
    }

    pub async fn by_vin(&self, vin: &str) -> Result<Vehicle, FetchError> {
        self.client()
            .get_json(&format!("{}/by-vin?vin={}", BASE, urlencoding::encode(vin.trim())))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use serde_json::json;

    type Api = VehiclesApi<StubTransport, MemoryStorage, RecordingNavigator>;

    #[tokio::test]
    async fn test_by_vin_encodes_query() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({"vehicleId": 5, "vehicleName": "VF 8", "vehicleVin": "RLLV A1 001"}),
        );

        let vehicle = Api::new(client).by_vin(" RLLV A1 001 ").await.unwrap();

        assert_eq!(vehicle.vehicle_id, 5);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/vehicles/by-vin?vin=RLLV%20A1%20001"
        );
    }

    #[tokio::test]
    async fn test_customer_scoped_lists() {
        let (client, transport, _) = offline_client();
        transport.push_json(200, json!([{"vehicleId": 1}, {"vehicleId": 2}]));
        transport.push_json(200, json!({"content": [], "totalElements": 0}));
        let api = Api::new(client);

        let owned = api.by_customer("C-001", &ListQuery::new(0, 10)).await.unwrap();
        let mine = api.mine(&ListQuery::default()).await.unwrap();

        assert_eq!(owned.content.len(), 2);
        assert_eq!(owned.total_pages, 1);
        assert!(mine.content.is_empty());
        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "http://api.test/api/vehicles/by-customer/C-001?page=0&size=10"
        );
        assert_eq!(
            requests[1].url,
            "http://api.test/api/vehicles/my-vehicles?page=0&size=50"
        );
    }
}
