//! User schemas.

use serde::Serialize;

/// Parameters of `user.login`.
#[derive(Clone, Serialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
    /// Return information about the authenticated user instead of a bare
    /// session id.
    #[serde(rename = "userData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<bool>,
}

impl UserLogin {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            user_data: None,
        }
    }
}

impl std::fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_data", &self.user_data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_params() {
        let login = UserLogin::new("Admin", "zabbix");
        assert_eq!(
            serde_json::to_value(&login).unwrap(),
            json!({"username": "Admin", "password": "zabbix"})
        );
    }

    #[test]
    fn test_login_debug_hides_password() {
        let login = UserLogin::new("Admin", "zabbix");
        let debug = format!("{login:?}");
        assert!(debug.contains("Admin"));
        assert!(!debug.contains("zabbix"));
    }
}
