use contracts::domain::service_center::{ServiceCenter, ServiceCenterForm, ServiceCenterPayload};
use contracts::shared::page::ListQuery;

use super::api::ServiceCentersApi;
use super::mirror::{seed, STORAGE_KEY};
use crate::shared::fallback::{load_or_mirror, mutate_or_mirror, Loaded, MutationOutcome};
use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::mirror::MirrorStore;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

pub const SERVICE_CENTERS_BANNER: &str =
    "API Trung tâm dịch vụ chưa sẵn sàng, đang hiển thị dữ liệu tạm (mock).";

#[derive(Debug, Clone)]
pub struct ServiceCentersService<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    api: ServiceCentersApi<T, S, N>,
    mirror: MirrorStore<ServiceCenter, S>,
    query: ListQuery,
}

impl ServiceCentersService {
    pub fn browser() -> Self {
        Self::new(ApiClient::browser(), BrowserStorage)
    }
}

impl<T, S, N> ServiceCentersService<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>, storage: S) -> Self {
        Self {
            query: client.config().list_query(),
            api: ServiceCentersApi::new(client),
            mirror: MirrorStore::new(STORAGE_KEY, seed, storage),
        }
    }

    pub fn mirror(&self) -> &MirrorStore<ServiceCenter, S> {
        &self.mirror
    }

    pub async fn list(&self) -> Result<Loaded<Vec<ServiceCenter>>, FetchError> {
        load_or_mirror(
            self.api.list(&self.query),
            || self.mirror.read_mock(),
            SERVICE_CENTERS_BANNER,
        )
        .await
    }

    /// Offline the new center goes to the front of the mirror under the
    /// next free id.
    pub async fn create(
        &self,
        payload: &ServiceCenterPayload,
    ) -> Result<MutationOutcome<ServiceCenter>, FetchError> {
        mutate_or_mirror(self.api.create(payload), || {
            self.mirror
                .prepend_new(ServiceCenter::from_payload(0, payload))
        })
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &ServiceCenterPayload,
    ) -> Result<MutationOutcome<ServiceCenter>, FetchError> {
        mutate_or_mirror(self.api.update(id, payload), || {
            self.mirror.update_by_id(id, |c| c.apply(payload))
        })
        .await
    }

    pub async fn remove(&self, id: i64) -> Result<MutationOutcome<ServiceCenter>, FetchError> {
        mutate_or_mirror(self.api.remove(id), || self.mirror.remove_by_id(id)).await
    }

    /// Creates or updates from raw form text. Coordinates that are not
    /// numbers are saved as `0`.
    pub async fn save_form(
        &self,
        editing: Option<i64>,
        form: &ServiceCenterForm,
    ) -> Result<MutationOutcome<ServiceCenter>, FetchError> {
        let (payload, invalid) = form.to_payload();
        if !invalid.is_empty() {
            log::warn!("Non-numeric coordinates saved as 0: {:?}", invalid);
        }
        match editing {
            Some(id) => self.update(id, &payload).await,
            None => self.create(&payload).await,
        }
    }
}
