use contracts::domain::installed_part::{InstalledPart, InstalledPartPayload};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/installed-parts";

pub type InstalledPartsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<InstalledPart, InstalledPartPayload, T, S, N>;

impl<T, S, N> InstalledPartsApi<T, S, N>
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
    ) -> Result<PageEnvelope<InstalledPart>, FetchError> {
        self.list_at(format!("by-vehicle/{}", vehicle_id), query).await
    }

    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<InstalledPart>, FetchError> {
        self.list_at("my-parts", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use serde_json::json;

    type Api = InstalledPartsApi<StubTransport, MemoryStorage, RecordingNavigator>;

    #[tokio::test]
    async fn test_by_vehicle_keeps_envelope_metadata() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({
                "content": [{"installedPartId": 11, "partId": "BAT-001", "vehicleId": 3, "isActive": true}],
                "totalElements": 1,
                "totalPages": 1,
                "first": true,
                "last": true
            }),
        );

        let page = Api::new(client)
            .by_vehicle(3, &ListQuery::new(0, 20))
            .await
            .unwrap();

        assert_eq!(page.content[0].installed_part_id, 11);
        assert_eq!(page.content[0].is_active, Some(true));
        assert!(page.last);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/installed-parts/by-vehicle/3?page=0&size=20"
        );
    }

    #[tokio::test]
    async fn test_create_echoes_record() {
        let (client, transport, _) = offline_client();
        transport.push_json(201, json!({"installedPartId": 12, "partId": "MOT-002"}));
        let payload = InstalledPartPayload {
            part_id: "MOT-002".into(),
            vehicle_id: 3,
            installation_date: "2025-01-15".into(),
            warranty_expiration_date: None,
            mileage_at_installation: Some(1200),
        };

        let created = Api::new(client).create(&payload).await.unwrap();

        assert_eq!(created.map(|p| p.installed_part_id), Some(12));
        let body: serde_json::Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["mileageAtInstallation"], json!(1200));
        assert!(body.get("warrantyExpirationDate").is_none());
    }
}
