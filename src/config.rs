use serde::{Deserialize, Serialize};

use crate::utils::constants::{CURRENT_USER_ENDPOINT, HIDDEN_CLASS, LOGIN_PATH, TOKEN_STORAGE_KEY};

/// Runtime configuration of the profile widget.
///
/// Every field has a default, so a host page can pass a partial JSON object
/// to `mount_profile_widget_with_config` and only override what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub element_ids: ElementIds,
    pub token_storage_key: String,
    pub current_user_endpoint: String,
    pub login_path: String,
    pub hidden_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            element_ids: ElementIds::default(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            current_user_endpoint: CURRENT_USER_ENDPOINT.to_string(),
            login_path: LOGIN_PATH.to_string(),
            hidden_class: HIDDEN_CLASS.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Id del `<script type="application/json">` con la config del host
pub const CONFIG_ELEMENT_ID: &str = "profile-widget-config";

/// Attribute on the config element that disables the automatic mount.
pub const MANUAL_MOUNT_ATTRIBUTE: &str = "data-manual-mount";

/// How the start hook mounts the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupPlan {
    Mount(WidgetConfig),
    /// The host calls `mount_profile_widget_with_config` itself.
    Manual,
}

impl StartupPlan {
    /// Decide from the host page's config element: its JSON text (if any)
    /// and whether it carries the manual-mount attribute.
    pub fn from_host(config_json: Option<&str>, manual: bool) -> Result<Self, serde_json::Error> {
        if manual {
            return Ok(StartupPlan::Manual);
        }
        match config_json.map(str::trim).filter(|json| !json.is_empty()) {
            Some(json) => WidgetConfig::from_json(json).map(StartupPlan::Mount),
            None => Ok(StartupPlan::Mount(WidgetConfig::default())),
        }
    }
}

/// Ids of the host-page elements the widget binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub trigger: String,
    pub panel: String,
    pub badge: String,
    pub name: String,
    pub email: String,
    pub logout: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            trigger: "profileButton".to_string(),
            panel: "profileDropdown".to_string(),
            badge: "userInitial".to_string(),
            name: "userName".to_string(),
            email: "profileEmail".to_string(),
            logout: "logoutButton".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.element_ids.trigger, "profileButton");
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let config = WidgetConfig::from_json(
            r#"{"login_path":"/signin","element_ids":{"logout":"signOut"}}"#,
        )
        .unwrap();
        assert_eq!(config.login_path, "/signin");
        assert_eq!(config.element_ids.logout, "signOut");
        assert_eq!(config.element_ids.panel, "profileDropdown");
        assert_eq!(config.token_storage_key, TOKEN_STORAGE_KEY);
    }

    #[test]
    fn no_config_element_mounts_defaults() {
        assert_eq!(
            StartupPlan::from_host(None, false).unwrap(),
            StartupPlan::Mount(WidgetConfig::default())
        );
        assert_eq!(
            StartupPlan::from_host(Some("  \n "), false).unwrap(),
            StartupPlan::Mount(WidgetConfig::default())
        );
    }

    #[test]
    fn host_config_reaches_first_mount() {
        let plan = StartupPlan::from_host(
            Some(r#"{"token_storage_key":"authToken","login_path":"/signin"}"#),
            false,
        )
        .unwrap();
        let StartupPlan::Mount(config) = plan else {
            panic!("expected a mount plan");
        };
        assert_eq!(config.token_storage_key, "authToken");
        assert_eq!(config.login_path, "/signin");
    }

    #[test]
    fn manual_attribute_skips_auto_mount() {
        assert_eq!(StartupPlan::from_host(None, true).unwrap(), StartupPlan::Manual);
        assert_eq!(
            StartupPlan::from_host(Some(r#"{"login_path":"/signin"}"#), true).unwrap(),
            StartupPlan::Manual
        );
    }

    #[test]
    fn broken_host_config_is_an_error() {
        assert!(StartupPlan::from_host(Some("{login_path:"), false).is_err());
    }

    #[test]
    fn rejects_wrong_field_types() {
        assert!(WidgetConfig::from_json(r#"{"login_path":42}"#).is_err());
    }
}
