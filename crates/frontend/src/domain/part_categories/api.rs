use contracts::domain::part_category::{PartCategory, PartCategoryPayload};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/part-categories";

/// Part categories. `remove` is a soft delete: the server only clears
/// `isActive` and parts keep their reference.
pub type PartCategoriesApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<PartCategory, PartCategoryPayload, T, S, N>;

impl<T, S, N> PartCategoriesApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    /// Active categories only, for part form dropdowns
    pub async fn active(&self) -> Result<Vec<PartCategory>, FetchError> {
        let items = self.client().get(&self.path("active")).await?.items();
        Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use contracts::shared::page::ListQuery;
    use serde_json::json;

    type Api = PartCategoriesApi<StubTransport, MemoryStorage, RecordingNavigator>;

    #[tokio::test]
    async fn test_active_list_and_soft_delete() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!([
                {"categoryId": 1, "categoryName": "Pin", "maxQuantityPerVehicle": 1},
                {"categoryId": 2, "categoryName": "Lốp", "maxQuantityPerVehicle": 4}
            ]),
        );
        transport.push_json(200, json!({"content": [{"categoryId": 3, "isActive": false}]}));
        transport.push_status(204);
        let api = Api::new(client);

        let active = api.active().await.unwrap();
        let all = api.list(&ListQuery::new(0, 20)).await.unwrap();
        api.remove(3).await.unwrap();

        assert_eq!(active.len(), 2);
        assert_eq!(active[1].max_quantity_per_vehicle, 4);
        assert!(!all.content[0].is_active);
        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/api/part-categories/active");
        assert_eq!(
            requests[1].url,
            "http://api.test/api/part-categories?page=0&size=20"
        );
        assert_eq!(requests[2].method, HttpMethod::Delete);
        assert_eq!(requests[2].url, "http://api.test/api/part-categories/3");
    }

    #[tokio::test]
    async fn test_update_sends_full_payload() {
        let (client, transport, _) = offline_client();
        transport.push_status(200);
        let payload = PartCategoryPayload {
            category_name: "Động cơ".into(),
            max_quantity_per_vehicle: 2,
            description: None,
            is_active: true,
        };

        let echoed = Api::new(client).update(7, &payload).await.unwrap();

        assert_eq!(echoed, None);
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"categoryName": "Động cơ", "maxQuantityPerVehicle": 2, "isActive": true})
        );
    }
}
