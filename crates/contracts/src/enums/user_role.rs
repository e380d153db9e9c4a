use serde::{Deserialize, Serialize};

/// Role string stored in the browser session after login.
///
/// Role checks in the UI are plain comparisons against this value; the
/// server remains the authority on what each role may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    EvmStaff,
    ScStaff,
    ScTechnician,
    Customer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::EvmStaff => "EVM_STAFF",
            UserRole::ScStaff => "SC_STAFF",
            UserRole::ScTechnician => "SC_TECHNICIAN",
            UserRole::Customer => "CUSTOMER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::EvmStaff => "EVM Staff",
            UserRole::ScStaff => "SC Staff",
            UserRole::ScTechnician => "Technician",
            UserRole::Customer => "Khách hàng",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::EvmStaff,
            UserRole::ScStaff,
            UserRole::ScTechnician,
            UserRole::Customer,
        ]
    }

    /// Numeric role id used by the user administration endpoints
    pub fn role_id(&self) -> i64 {
        match self {
            UserRole::Admin => 1,
            UserRole::ScStaff => 2,
            UserRole::ScTechnician => 3,
            UserRole::EvmStaff => 4,
            UserRole::Customer => 5,
        }
    }

    /// Accepts the stored code with or without a `ROLE_` prefix.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let code = code.strip_prefix("ROLE_").unwrap_or(code);
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(UserRole::from_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("ROLE_SC_STAFF"), Some(UserRole::ScStaff));
        assert_eq!(UserRole::from_code("admin"), None);
        assert_eq!(UserRole::from_code(""), None);
    }

    #[test]
    fn test_role_ids() {
        assert_eq!(UserRole::Admin.role_id(), 1);
        assert_eq!(UserRole::EvmStaff.role_id(), 4);
        assert_eq!(UserRole::Customer.role_id(), 5);
    }
}
