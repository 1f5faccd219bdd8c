//! Data access configuration
//!
//! The screen never fetches data itself. It only hands settings to the data
//! access layer a concrete screen provides.

use serde::{Deserialize, Serialize};

/// Settings sink implemented by the data access layer
pub trait DataAccess {
    fn set_url_service_web_json(&mut self, url: &str);

    fn set_user(&mut self, user: &str, password: &str);

    fn set_timeout(&mut self, timeout_ms: u64);

    fn set_delay(&mut self, delay_ms: u64);

    fn set_basic_authentication(&mut self, enabled: bool);

    fn set_debug_mode(&mut self, enabled: bool);
}

/// Plain settings holder. A data access layer can embed it and read back
/// whatever the screen configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAccessSettings {
    pub url_service_web_json: Option<String>,
    pub user: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub timeout_ms: Option<u64>,
    pub delay_ms: Option<u64>,
    pub basic_authentication: bool,
    pub debug: bool,
}

impl DataAccess for DataAccessSettings {
    fn set_url_service_web_json(&mut self, url: &str) {
        self.url_service_web_json = Some(url.trim().to_string());
    }

    fn set_user(&mut self, user: &str, password: &str) {
        self.user = Some(user.to_string());
        self.password = Some(password.to_string());
    }

    fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = Some(timeout_ms);
    }

    fn set_delay(&mut self, delay_ms: u64) {
        self.delay_ms = Some(delay_ms);
    }

    fn set_basic_authentication(&mut self, enabled: bool) {
        self.basic_authentication = enabled;
    }

    fn set_debug_mode(&mut self, enabled: bool) {
        self.debug = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_record_values() {
        let mut settings = DataAccessSettings::default();

        settings.set_url_service_web_json(" http://localhost:8080/api ");
        settings.set_user("admin", "secret");
        settings.set_timeout(5000);
        settings.set_delay(250);
        settings.set_basic_authentication(true);
        settings.set_debug_mode(true);

        assert_eq!(
            settings.url_service_web_json.as_deref(),
            Some("http://localhost:8080/api")
        );
        assert_eq!(settings.user.as_deref(), Some("admin"));
        assert_eq!(settings.timeout_ms, Some(5000));
        assert_eq!(settings.delay_ms, Some(250));
        assert!(settings.basic_authentication);
        assert!(settings.debug);
    }

    #[test]
    fn test_password_not_serialized() {
        let mut settings = DataAccessSettings::default();
        settings.set_user("admin", "secret");

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("admin"));
        assert!(!json.contains("secret"));
    }
}
