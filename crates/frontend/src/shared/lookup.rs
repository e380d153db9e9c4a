//! Reference lists for pickers: service centers, technicians and parts.
//!
//! Each list is resolved once and cached for the lifetime of the service.
//! Service centers and technicians are static sample data; parts come from
//! the server with a static catalogue as fallback.

use contracts::domain::part::Part;
use contracts::shared::page::ListQuery;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::shared::http::{
    with_query, ApiClient, FetchError, GlooTransport, HttpMethod, HttpTransport, RequestOptions,
};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterOption {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub service_center_id: i64,
}

const PARTS_PAGE_SIZE: u32 = 100;

pub struct LookupService<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    client: ApiClient<T, S, N>,
    service_centers: OnceCell<Vec<CenterOption>>,
    technicians: OnceCell<Vec<Technician>>,
    parts: OnceCell<Vec<Part>>,
}

impl<T, S, N> LookupService<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self {
            client,
            service_centers: OnceCell::new(),
            technicians: OnceCell::new(),
            parts: OnceCell::new(),
        }
    }

    pub fn service_centers(&self) -> &[CenterOption] {
        self.service_centers.get_or_init(sample_service_centers)
    }

    pub fn technicians(&self) -> &[Technician] {
        self.technicians.get_or_init(sample_technicians)
    }

    pub fn technicians_of(&self, service_center_id: i64) -> Vec<Technician> {
        self.technicians()
            .iter()
            .filter(|t| t.service_center_id == service_center_id)
            .cloned()
            .collect()
    }

    /// Parts catalogue. Any failure, auth included, falls back to the static
    /// catalogue; whichever answer comes first is kept.
    pub async fn parts(&self) -> Vec<Part> {
        if let Some(parts) = self.parts.get() {
            return parts.clone();
        }

        let parts = match self.fetch_parts().await {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("Parts lookup unavailable, using built-in catalogue: {}", e);
                fallback_parts()
            }
        };
        // a concurrent caller may have filled the cell first
        self.parts.get_or_init(|| parts).clone()
    }

    async fn fetch_parts(&self) -> Result<Vec<Part>, FetchError> {
        let path = with_query("/api/parts", &ListQuery::new(0, PARTS_PAGE_SIZE))?;
        let response = self
            .client
            .request(
                &path,
                RequestOptions::new(HttpMethod::Get).suppress_auth_redirect(),
            )
            .await?;
        Ok(response
            .page()
            .content
            .into_iter()
            .filter_map(|item| serde_json::from_value::<Part>(item).ok())
            .collect())
    }
}

fn sample_service_centers() -> Vec<CenterOption> {
    [
        (1, "Trung tâm dịch vụ Hà Nội", "123 Đường ABC, Hà Nội"),
        (2, "Trung tâm dịch vụ TP.HCM", "456 Đường XYZ, TP.HCM"),
        (3, "Trung tâm dịch vụ Đà Nẵng", "789 Đường DEF, Đà Nẵng"),
    ]
    .into_iter()
    .map(|(id, name, address)| CenterOption {
        id,
        name: name.to_string(),
        address: address.to_string(),
    })
    .collect()
}

fn sample_technicians() -> Vec<Technician> {
    [
        (1, "Nguyễn Văn A", "tech1@example.com", 1),
        (2, "Trần Thị B", "tech2@example.com", 1),
        (3, "Lê Văn C", "tech3@example.com", 2),
        (4, "Phạm Thị D", "tech4@example.com", 3),
    ]
    .into_iter()
    .map(|(id, name, email, service_center_id)| Technician {
        id,
        name: name.to_string(),
        email: email.to_string(),
        service_center_id,
    })
    .collect()
}

pub fn fallback_parts() -> Vec<Part> {
    vec![
        Part::new("BAT-001", "Battery Pack", 1_000_000.0),
        Part::new("MOT-002", "Electric Motor", 2_500_000.0),
        Part::new("CHG-003", "Charging Port", 500_000.0),
        Part::new("CTR-004", "Controller Unit", 800_000.0),
        Part::new("BRK-005", "Brake System", 1_200_000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offline_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_parts_from_server_are_cached() {
        let (client, transport, _) = offline_client();
        transport.push_json(
            200,
            json!({"content": [{"partId": "P-1", "partName": "Inverter", "partNumber": "P-1", "price": 42.0}]}),
        );
        let lookup = LookupService::new(client);

        let parts = lookup.parts().await;
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].part_name, "Inverter");

        let again = lookup.parts().await;
        assert_eq!(again, parts);
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/api/parts?page=0&size=100");
    }

    #[tokio::test]
    async fn test_parts_fall_back_to_catalogue() {
        let (client, transport, _) = offline_client();
        transport.push_status(500);
        let lookup = LookupService::new(client);

        let parts = lookup.parts().await;
        assert_eq!(parts, fallback_parts());
        assert_eq!(parts[1].part_id, "MOT-002");
        assert_eq!(parts[1].price, 2_500_000.0);
    }

    #[test]
    fn test_static_lists() {
        let (client, _, _) = offline_client();
        let lookup = LookupService::new(client);
        assert_eq!(lookup.service_centers().len(), 3);
        assert_eq!(lookup.service_centers()[2].name, "Trung tâm dịch vụ Đà Nẵng");
        let sc1 = lookup.technicians_of(1);
        assert_eq!(sc1.len(), 2);
        assert_eq!(sc1[1].email, "tech2@example.com");
    }
}
