use contracts::domain::warranty_claim::{
    ClaimCompletion, ClaimRejection, ClaimStatusUpdate, WarrantyClaim, WarrantyClaimPayload,
};
use contracts::shared::page::{ListQuery, PageEnvelope};

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/warranty-claims";

/// Warranty claims and their workflow transitions.
///
/// The transitions themselves are validated by the server; a rejected
/// transition comes back as [`FetchError::Status`].
pub type WarrantyClaimsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<WarrantyClaim, WarrantyClaimPayload, T, S, N>;

impl<T, S, N> WarrantyClaimsApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    pub async fn update_status(&self, id: i64, update: &ClaimStatusUpdate) -> Result<(), FetchError> {
        self.client().patch(&self.path(format!("{}/status", id)), update).await?;
        Ok(())
    }

    pub async fn evm_accept(&self, id: i64) -> Result<(), FetchError> {
        self.client().patch_empty(&self.path(format!("{}/evm-accept", id))).await?;
        Ok(())
    }

    pub async fn evm_reject(&self, id: i64, rejection: &ClaimRejection) -> Result<(), FetchError> {
        self.client()
            .patch(&self.path(format!("{}/evm-reject", id)), rejection)
            .await?;
        Ok(())
    }

    pub async fn tech_start(&self, id: i64) -> Result<(), FetchError> {
        self.client().patch_empty(&self.path(format!("{}/tech-start", id))).await?;
        Ok(())
    }

    pub async fn tech_complete(&self, id: i64, completion: &ClaimCompletion) -> Result<(), FetchError> {
        self.client()
            .patch(&self.path(format!("{}/tech-complete", id)), completion)
            .await?;
        Ok(())
    }

    pub async fn by_vehicle(
        &self,
        vehicle_id: i64,
        query: &ListQuery,
    ) -> Result<PageEnvelope<WarrantyClaim>, FetchError> {
        self.list_at(format!("by-vehicle/{}", vehicle_id), query).await
    }

    pub async fn by_customer(
        &self,
        customer_id: &str,
        query: &ListQuery,
    ) -> Result<PageEnvelope<WarrantyClaim>, FetchError> {
        self.list_at(format!("by-customer/{}", urlencoding::encode(customer_id)), query)
            .await
    }

    /// Claims filed by the signed-in customer
    pub async fn mine(&self, query: &ListQuery) -> Result<PageEnvelope<WarrantyClaim>, FetchError> {
        self.list_at("my-claims", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, RecordingNavigator, StubTransport};
    use contracts::enums::WarrantyClaimStatus;
    use serde_json::{json, Value};

    type Api = WarrantyClaimsApi<StubTransport, MemoryStorage, RecordingNavigator>;

    fn body(raw: Option<&str>) -> Value {
        serde_json::from_str(raw.unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_workflow_transitions() {
        let (client, transport, _) = offline_client();
        for _ in 0..4 {
            transport.push_status(200);
        }
        let api = Api::new(client);

        api.evm_accept(7).await.unwrap();
        api.evm_reject(8, &ClaimRejection { reason: "Hết hạn bảo hành".into() })
            .await
            .unwrap();
        api.tech_start(7).await.unwrap();
        api.tech_complete(7, &ClaimCompletion { notes: "Đã thay module pin".into() })
            .await
            .unwrap();

        let requests = transport.requests();
        assert!(requests.iter().all(|r| r.method == HttpMethod::Patch));
        assert_eq!(requests[0].url, "http://api.test/api/warranty-claims/7/evm-accept");
        assert_eq!(requests[0].body, None);
        assert_eq!(requests[1].url, "http://api.test/api/warranty-claims/8/evm-reject");
        assert_eq!(body(requests[1].body.as_deref()), json!({"reason": "Hết hạn bảo hành"}));
        assert_eq!(requests[2].url, "http://api.test/api/warranty-claims/7/tech-start");
        assert_eq!(requests[3].url, "http://api.test/api/warranty-claims/7/tech-complete");
        assert_eq!(body(requests[3].body.as_deref()), json!({"notes": "Đã thay module pin"}));
    }

    #[tokio::test]
    async fn test_status_update_body() {
        let (client, transport, _) = offline_client();
        transport.push_json(200, json!({}));

        Api::new(client)
            .update_status(
                3,
                &ClaimStatusUpdate {
                    status: WarrantyClaimStatus::ManagerReview,
                    comments: Some("Chuyển quản lý".into()),
                    updated_by: None,
                },
            )
            .await
            .unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.url, "http://api.test/api/warranty-claims/3/status");
        assert_eq!(
            body(sent.body.as_deref()),
            json!({"status": "MANAGER_REVIEW", "comments": "Chuyển quản lý"})
        );
    }

    #[tokio::test]
    async fn test_my_claims_decodes_status() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({"content": [{"warrantyClaimId": 1, "status": "PENDING_PAYMENT", "description": "Pin sụt nhanh"}], "totalElements": 1}),
        );

        let page = Api::new(client)
            .mine(&ListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.content[0].status, WarrantyClaimStatus::PendingPayment);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/warranty-claims/my-claims?page=0&size=50"
        );
    }
}
