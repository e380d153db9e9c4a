use contracts::domain::part::{Part, PartPayload};

use crate::shared::http::{ApiClient, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/parts";

/// Parts catalogue, keyed by the part code (`BAT-001`, ...)
pub type PartsApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<Part, PartPayload, T, S, N>;

impl<T, S, N> PartsApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }
}
