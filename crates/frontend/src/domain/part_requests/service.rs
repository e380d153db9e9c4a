use contracts::domain::part_request::PartRequest;
use contracts::enums::PartRequestStatus;
use contracts::shared::page::ListQuery;

use super::api::PartRequestsApi;
use super::mirror::{seed, STORAGE_KEY};
use crate::shared::fallback::{load_or_mirror, mutate_or_mirror, Loaded, MutationOutcome};
use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::mirror::MirrorStore;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

pub const PART_REQUESTS_BANNER: &str =
    "API Part Requests chưa sẵn sàng, hiển thị dữ liệu tạm (mock).";

#[derive(Debug, Clone)]
pub struct PartRequestsService<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    api: PartRequestsApi<T, S, N>,
    mirror: MirrorStore<PartRequest, S>,
    query: ListQuery,
}

impl PartRequestsService {
    pub fn browser() -> Self {
        Self::new(ApiClient::browser(), BrowserStorage)
    }
}

impl<T, S, N> PartRequestsService<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>, storage: S) -> Self {
        Self {
            query: client.config().list_query(),
            api: PartRequestsApi::new(client),
            mirror: MirrorStore::new(STORAGE_KEY, seed, storage),
        }
    }

    pub fn mirror(&self) -> &MirrorStore<PartRequest, S> {
        &self.mirror
    }

    pub async fn list(&self) -> Result<Loaded<Vec<PartRequest>>, FetchError> {
        load_or_mirror(
            self.api.list(&self.query),
            || self.mirror.read_mock(),
            PART_REQUESTS_BANNER,
        )
        .await
    }

    /// Last write wins; no transition rules are enforced here.
    pub async fn update_status(
        &self,
        id: i64,
        status: PartRequestStatus,
    ) -> Result<MutationOutcome<PartRequest>, FetchError> {
        mutate_or_mirror(self.api.update_status(id, status), || {
            self.mirror.update_by_id(id, |r| r.status = status)
        })
        .await
    }
}
