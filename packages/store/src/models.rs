//! # Session model and lenient field decoding
//!
//! [`AuthenticatedUser`] is the record persisted under [`crate::SESSION_KEY`]
//! after a login or account creation. It is also decoded straight from the
//! backend's login / create-account responses, whose shapes vary, so every
//! field is optional and decoded leniently.
//!
//! The `lenient` helpers are shared with the account and transaction models
//! of the `api` crate:
//!
//! - [`lenient::positive_id`] accepts JSON numbers or numeric strings and keeps
//!   only finite, positive, integral values.
//! - [`lenient::text`] accepts strings or numbers; `null` and anything else
//!   become an empty string.
//! - [`lenient::opt_text`] is the same but yields `None` for blank input.

use serde::{Deserialize, Serialize};

/// The locally cached "who is logged in" record.
///
/// Used only to filter the shared account list for display. It carries no
/// credential and grants nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(default, deserialize_with = "lenient::positive_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::positive_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::positive_id", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Account the backend returned alongside the login, if any.
    #[serde(default, deserialize_with = "lenient::positive_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Single-field name some login responses send instead of first/last.
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthenticatedUser {
    /// Candidate identifiers in lookup order: `userId`, `id`, `customerId`.
    pub fn ids(&self) -> Vec<i64> {
        [self.user_id, self.id, self.customer_id]
            .into_iter()
            .flatten()
            .collect()
    }

    /// The first identifier available, used to scope backend queries.
    pub fn primary_id(&self) -> Option<i64> {
        self.ids().into_iter().next()
    }

    /// Greeting name: "first last", else the customer name, else `name`,
    /// else "Customer".
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if !first.is_empty() || !last.is_empty() {
            return format!("{first} {last}").trim().to_string();
        }
        [self.customer_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or("Customer")
            .to_string()
    }
}

pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Interpret a JSON value as a positive integral identifier.
    pub fn id_from_value(value: &Value) -> Option<i64> {
        let n = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if n.is_finite() && n > 0.0 && n.fract() == 0.0 && n <= i64::MAX as f64 {
            Some(n as i64)
        } else {
            None
        }
    }

    pub fn positive_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(id_from_value))
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        })
    }

    pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = text(deserializer)?;
        Ok(if s.trim().is_empty() { None } else { Some(s) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_login_response() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "userId": 4,
            "id": 4,
            "firstName": "jane",
            "lastName": "doe",
            "accountId": 12
        }))
        .unwrap();
        assert_eq!(user.ids(), vec![4, 4]);
        assert_eq!(user.account_id, Some(12));
        assert_eq!(user.customer_name, None);
    }

    #[test]
    fn test_ids_are_lenient() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "userId": "7",
            "id": -3,
            "customerId": 2.5,
            "firstName": null
        }))
        .unwrap();
        assert_eq!(user.ids(), vec![7]);
        assert_eq!(user.primary_id(), Some(7));
        assert_eq!(user.first_name, "");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = AuthenticatedUser {
            first_name: " Jane ".into(),
            last_name: "".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Jane");

        user.first_name.clear();
        user.customer_name = Some("jane doe".into());
        assert_eq!(user.display_name(), "jane doe");

        user.customer_name = None;
        assert_eq!(user.display_name(), "Customer");
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "userId": 3,
            "name": "Sam Lee"
        }))
        .unwrap();
        assert_eq!(user.name.as_deref(), Some("Sam Lee"));
        assert_eq!(user.display_name(), "Sam Lee");

        let both = AuthenticatedUser {
            customer_name: Some("jane doe".into()),
            name: Some("Sam Lee".into()),
            ..user
        };
        assert_eq!(both.display_name(), "jane doe");
    }

    #[test]
    fn test_serialized_form_skips_absent_ids() {
        let user = AuthenticatedUser {
            user_id: Some(1),
            first_name: "a".into(),
            last_name: "b".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({"userId": 1, "firstName": "a", "lastName": "b"}));
    }
}
