use contracts::domain::warranty_validation::WarrantyValidation;

use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/warranty-validation";

/// Read-only coverage checks. Coverage and fees are always computed by the
/// server.
#[derive(Debug, Clone)]
pub struct WarrantyValidationApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
}

impl<T, S, N> WarrantyValidationApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self { client }
    }

    pub async fn vehicle(&self, vehicle_id: i64) -> Result<WarrantyValidation, FetchError> {
        self.client
            .get_json(&format!("{}/vehicle/{}", BASE, vehicle_id))
            .await
    }

    pub async fn vehicle_by_vin(&self, vin: &str) -> Result<WarrantyValidation, FetchError> {
        self.client
            .get_json(&format!("{}/vehicle/vin/{}", BASE, urlencoding::encode(vin.trim())))
            .await
    }

    pub async fn installed_part(&self, installed_part_id: i64) -> Result<WarrantyValidation, FetchError> {
        self.client
            .get_json(&format!("{}/installed-part/{}", BASE, installed_part_id))
            .await
    }

    /// Paid-repair quote for a vehicle whose warranty has lapsed.
    pub async fn vehicle_fee(
        &self,
        vehicle_id: i64,
        estimated_repair_cost: f64,
    ) -> Result<WarrantyValidation, FetchError> {
        self.client
            .get_json(&fee_path("vehicle", vehicle_id, estimated_repair_cost))
            .await
    }

    pub async fn installed_part_fee(
        &self,
        installed_part_id: i64,
        estimated_repair_cost: f64,
    ) -> Result<WarrantyValidation, FetchError> {
        self.client
            .get_json(&fee_path("installed-part", installed_part_id, estimated_repair_cost))
            .await
    }
}

fn fee_path(target: &str, id: i64, estimated_repair_cost: f64) -> String {
    format!(
        "{}/{}/{}/calculate-fee?estimatedRepairCost={}",
        BASE, target, id, estimated_repair_cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offline_client;
    use contracts::enums::WarrantyStatus;
    use serde_json::json;

    #[test]
    fn test_fee_path() {
        assert_eq!(
            fee_path("vehicle", 3, 5000000.0),
            "/api/warranty-validation/vehicle/3/calculate-fee?estimatedRepairCost=5000000"
        );
        assert_eq!(
            fee_path("installed-part", 9, 1250.5),
            "/api/warranty-validation/installed-part/9/calculate-fee?estimatedRepairCost=1250.5"
        );
    }

    #[tokio::test]
    async fn test_expired_vehicle_quote() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({
                "warrantyStatus": "EXPIRED_MILEAGE",
                "isValidForFreeWarranty": false,
                "canProvidePaidWarranty": true,
                "estimatedWarrantyFee": 750000.0,
                "mileageLimit": 100000,
                "currentMileage": 120500
            }),
        );

        let quote = WarrantyValidationApi::new(client)
            .vehicle_fee(3, 5000000.0)
            .await
            .unwrap();

        assert_eq!(quote.warranty_status, WarrantyStatus::ExpiredMileage);
        assert_eq!(quote.current_mileage, Some(120500));
        assert_eq!(quote.preview_total(100000.0), Some(850000.0));
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/warranty-validation/vehicle/3/calculate-fee?estimatedRepairCost=5000000"
        );
    }

    #[tokio::test]
    async fn test_vin_lookup_path() {
        let (client, transport, _) = offline_client();
        transport.push_json(200, json!({"warrantyStatus": "VALID", "isValidForFreeWarranty": true}));

        let verdict = WarrantyValidationApi::new(client)
            .vehicle_by_vin("VF8/2024")
            .await
            .unwrap();

        assert!(verdict.is_valid_for_free_warranty);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/warranty-validation/vehicle/vin/VF8%2F2024"
        );
    }
}
