use contracts::domain::admin_user::{AdminUser, AdminUserPayload, UserStatusChange};
use contracts::shared::page::{ListQuery, PageEnvelope};
use serde_json::{Map, Value};

use crate::shared::http::{
    with_query, ApiClient, FetchError, GlooTransport, HttpTransport, ResourceApi,
};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

const BASE: &str = "/api/admin/users";

/// User administration. The server's user DTO varies (`id` or `userId`,
/// `roleName` or a `roles` list), so reads go through [`AdminUser::from_raw`]
/// via [`users`](Self::users) and [`user`](Self::user).
pub type AdminUsersApi<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> =
    ResourceApi<AdminUser, AdminUserPayload, T, S, N>;

impl<T, S, N> AdminUsersApi<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>) -> Self {
        Self::at(client, BASE)
    }

    /// Page of users; `search` and `role` in the query narrow it down.
    pub async fn users(&self, query: &ListQuery) -> Result<PageEnvelope<AdminUser>, FetchError> {
        let response = self.client().get(&with_query(BASE, query)?).await?;
        Ok(response.page().map(|item| AdminUser::from_raw(&item)))
    }

    pub async fn user(&self, id: i64) -> Result<AdminUser, FetchError> {
        let response = self.client().get(&self.path(id)).await?;
        Ok(AdminUser::from_raw(response.data.as_ref().unwrap_or(&Value::Null)))
    }

    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<(), FetchError> {
        self.client()
            .patch(&self.path(format!("{}/status", id)), &UserStatusChange { is_active })
            .await?;
        Ok(())
    }

    /// Counters as the server reports them; a non-object body yields none.
    pub async fn statistics(&self) -> Result<Map<String, Value>, FetchError> {
        let response = self.client().get(&self.path("statistics")).await?;
        Ok(match response.data {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        })
    }
}
