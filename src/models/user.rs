use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;
use crate::utils::constants::{FALLBACK_BADGE, FALLBACK_NAME};

/// Usuario devuelto por el endpoint de autenticación
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRecord {
    /// Parse a response body.
    ///
    /// The body must be a JSON object; `name` and `email` may be missing or
    /// null but must be strings otherwise. Extra fields are ignored.
    pub fn from_body(body: &str) -> Result<Self, ProfileError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(ProfileError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Text shown in the widget for one user, fallbacks already applied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProfileDisplay {
    pub badge: String,
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for ProfileDisplay {
    fn from(user: &UserRecord) -> Self {
        let name = user.name.as_deref().filter(|n| !n.is_empty());
        let badge = name
            .and_then(|n| n.chars().next())
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| FALLBACK_BADGE.to_string());

        Self {
            badge,
            name: name.unwrap_or(FALLBACK_NAME).to_string(),
            email: user.email.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: Option<&str>) -> UserRecord {
        UserRecord {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn badge_is_uppercased_first_char() {
        for (name, badge) in [("ada", "A"), ("Grace", "G"), ("ñandú", "Ñ"), ("éric", "É"), ("7up", "7")] {
            let display = ProfileDisplay::from(&user(Some(name), None));
            assert_eq!(display.badge, badge, "name {name}");
            assert_eq!(display.name, name);
        }
    }

    #[test]
    fn missing_or_empty_name_falls_back() {
        for record in [user(None, None), user(Some(""), None)] {
            let display = ProfileDisplay::from(&record);
            assert_eq!(display.badge, "U");
            assert_eq!(display.name, "User");
            assert_eq!(display.email, "");
        }
    }

    #[test]
    fn parses_full_body() {
        let record = UserRecord::from_body(r#"{"name":"Ada","email":"ada@example.com","id":7}"#).unwrap();
        assert_eq!(record, user(Some("Ada"), Some("ada@example.com")));
    }

    #[test]
    fn null_and_missing_fields_are_none() {
        let record = UserRecord::from_body(r#"{"name":null}"#).unwrap();
        assert_eq!(record, UserRecord::default());
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in [r#"["Ada","ada@example.com"]"#, "null", "\"Ada\"", "42", "not json"] {
            assert!(
                matches!(UserRecord::from_body(body), Err(ProfileError::Parse(_))),
                "body {body}"
            );
        }
    }

    #[test]
    fn rejects_non_string_fields() {
        assert!(UserRecord::from_body(r#"{"name":5}"#).is_err());
        assert!(UserRecord::from_body(r#"{"email":{"primary":"a@b"}}"#).is_err());
    }
}
