use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::UserRole;
use crate::shared::raw;

/// Account row on the user administration screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Role code without the `ROLE_` prefix, `"UNKNOWN"` when the server sent
    /// none
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    /// Accepts `id` or `userId`, a flat `roleName` or a `roles` list, and
    /// either `isActive` or `active`.
    pub fn from_raw(raw: &Value) -> Self {
        let role_name = raw::string_field(raw, &["roleName"])
            .or_else(|| {
                raw.get("roles")?
                    .as_array()?
                    .first()?
                    .as_str()
                    .map(|r| r.strip_prefix("ROLE_").unwrap_or(r).to_string())
            })
            .unwrap_or_else(|| "UNKNOWN".to_string());
        Self {
            user_id: raw::i64_field(raw, &["id", "userId"]).unwrap_or_default(),
            username: raw::string_field(raw, &["username"]).unwrap_or_default(),
            email: raw::string_field(raw, &["email"]).unwrap_or_default(),
            full_name: raw::string_field(raw, &["fullName", "name"]),
            phone: raw::string_field(raw, &["phone", "phoneNumber"]),
            address: raw::string_field(raw, &["address"]),
            role_name,
            is_active: raw::bool_field(raw, &["isActive", "active"]).unwrap_or(true),
            created_at: raw::string_field(raw, &["createdAt"]),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        UserRole::from_code(&self.role_name)
    }
}

/// Create and update body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserPayload {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

impl AdminUserPayload {
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role_id = Some(role.role_id());
        self
    }
}

/// Body of `PATCH /api/admin/users/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusChange {
    pub is_active: bool,
}
