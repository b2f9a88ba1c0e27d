use serde::{Deserialize, Serialize};

use crate::common::{lenient_bool, lenient_number, lenient_string};

pub(crate) const DEFAULT_USER: &str = "default";
const DEFAULT_NAME: &str = "Admin User";

/// Per-user preferences. Fields missing from a stored document fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Settings {
    #[serde(default = "default_currency", deserialize_with = "lenient_string")]
    pub(crate) currency: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) month_income: f64,
    #[serde(default = "default_name", deserialize_with = "lenient_string")]
    pub(crate) name: String,
    #[serde(default = "default_email", deserialize_with = "lenient_string")]
    pub(crate) email: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub(crate) dark_mode: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_email() -> String {
    "admin@example.com".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: default_currency(),
            month_income: 0.0,
            name: default_name(),
            email: default_email(),
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Name shown for the profile. A named user who never changed the default profile name is shown
    /// by user id instead.
    pub(crate) fn display_name<'a>(&'a self, user: &'a str) -> &'a str {
        if user != DEFAULT_USER && self.name == DEFAULT_NAME {
            user
        } else {
            self.name.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_merges_over_defaults() {
        let s: Settings = serde_json::from_str(r#"{"monthIncome": "1500", "darkMode": true}"#).unwrap();
        assert_eq!(s.currency, "$");
        assert_eq!(s.month_income, 1500.0);
        assert_eq!(s.name, "Admin User");
        assert_eq!(s.email, "admin@example.com");
        assert!(s.dark_mode);
    }

    #[test]
    fn test_odd_dark_mode_keeps_other_fields() {
        let s: Settings = serde_json::from_str(r#"{"currency": "€", "monthIncome": 900, "darkMode": null}"#).unwrap();
        assert_eq!(s.currency, "€");
        assert_eq!(s.month_income, 900.0);
        assert!(!s.dark_mode);

        let s: Settings = serde_json::from_str(r#"{"currency": "€", "darkMode": "true"}"#).unwrap();
        assert_eq!(s.currency, "€");
        assert!(s.dark_mode);
    }

    #[test]
    fn test_settings_serde_field_names() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"monthIncome\":0.0"));
        assert!(json.contains("\"darkMode\":false"));
    }

    #[test]
    fn test_display_name() {
        let mut s = Settings::default();
        assert_eq!(s.display_name("default"), "Admin User");
        assert_eq!(s.display_name("alice"), "alice");

        s.name = "Alice Smith".to_string();
        assert_eq!(s.display_name("alice"), "Alice Smith");
    }
}
