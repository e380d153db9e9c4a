use contracts::enums::UserRole;
use leptos::prelude::*;

use super::storage::SessionStore;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};

/// Whether the stored session may open a screen restricted to `allowed`.
/// An empty list only requires a token.
pub fn role_allowed<S: KeyValueStorage>(session: &SessionStore<S>, allowed: &[UserRole]) -> bool {
    if session.token().is_none() {
        return false;
    }
    allowed.is_empty() || session.role().is_some_and(|role| allowed.contains(&role))
}

/// Renders children only for a signed-in user holding one of `roles`.
///
/// The check runs against the persisted session on render; the server still
/// decides what each call may do.
#[component]
pub fn RequireRole(
    #[prop(optional)] roles: Vec<UserRole>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = SessionStore::new(BrowserStorage);
    let allowed = role_allowed(&session, &roles);
    if !allowed {
        log::info!(
            "Access denied for role {:?}, required one of {:?}",
            session.role_code(),
            roles
        );
    }

    view! {
        <Show
            when=move || allowed
            fallback=|| view! { <div style="padding: 24px;">"Bạn không có quyền truy cập trang này."</div> }
        >
            {children()}
        </Show>
    }
}
