use contracts::domain::customer::{Customer, CustomerPayload};

use crate::shared::http::{ApiClient, GlooTransport, HttpTransport, ResourceApi};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/customers";

pub type CustomersApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<Customer, CustomerPayload, T, S, N>;

impl<T, S, N> CustomersApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }
}
