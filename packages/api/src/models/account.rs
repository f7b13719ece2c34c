//! # Account record
//!
//! The backend has returned accounts in several shapes over time, so every
//! field the views read can come from more than one place:
//!
//! | Quantity | Sources, in precedence order |
//! |----------|------------------------------|
//! | type | `type`, `accountType` |
//! | balance | `balance`, `availableBalance`, `currentBalance`, else 0 |
//! | owner ids | `userId`, `customerId`, `ownerId`, `customer.id` |
//! | owner names | `firstName` / `lastName` / `customerName`, else the nested `customer` object |
//!
//! Fields that are present but unusable (a non-numeric balance, a negative id)
//! decode as absent instead of failing the whole record.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use store::models::lenient;

use super::money;

/// A bank account as returned by `GET /accounts` or `GET /accounts/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub id: Option<i64>,
    /// Free-text type, e.g. "CURRENT" or "Savings Account"
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub r#type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub account_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub account_number: String,
    #[serde(default, deserialize_with = "money")]
    pub balance: Option<Decimal>,
    #[serde(default, deserialize_with = "money")]
    pub available_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "money")]
    pub current_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "money")]
    pub overdraft_limit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub owner_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "customer_ref")]
    pub customer: Option<CustomerRef>,
}

/// Owner object nested under `customer`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub last_name: Option<String>,
}

fn customer_ref<'de, D>(deserializer: D) -> Result<Option<CustomerRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

impl Account {
    /// The raw type text, empty when the backend sent none.
    pub fn type_label(&self) -> &str {
        self.r#type
            .as_deref()
            .or(self.account_type.as_deref())
            .unwrap_or("")
    }

    /// Balance from the first balance field present, else zero.
    pub fn balance(&self) -> Decimal {
        self.balance
            .or(self.available_balance)
            .or(self.current_balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Owner identifiers in lookup order.
    pub fn owner_ids(&self) -> Vec<i64> {
        [
            self.user_id,
            self.customer_id,
            self.owner_id,
            self.customer.as_ref().and_then(|c| c.id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn owner_first_name(&self) -> Option<&str> {
        self.first_name
            .as_deref()
            .or_else(|| self.customer.as_ref()?.first_name.as_deref())
    }

    pub fn owner_last_name(&self) -> Option<&str> {
        self.last_name
            .as_deref()
            .or_else(|| self.customer.as_ref()?.last_name.as_deref())
    }

    pub fn owner_customer_name(&self) -> Option<&str> {
        self.customer_name
            .as_deref()
            .or_else(|| self.customer.as_ref()?.name.as_deref())
    }

    /// Customer line for the details card: the customer name, else
    /// "first last", else "N/A".
    pub fn customer_display(&self) -> String {
        if let Some(name) = self.owner_customer_name() {
            return name.to_string();
        }
        let joined = format!(
            "{} {}",
            self.owner_first_name().unwrap_or(""),
            self.owner_last_name().unwrap_or("")
        );
        let joined = joined.trim();
        if joined.is_empty() {
            "N/A".to_string()
        } else {
            joined.to_string()
        }
    }

    /// Status text, or `default` when the backend sent none.
    pub fn status_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.status.as_deref().unwrap_or(default)
    }

    /// Whether the status reads as active. A missing status counts as active.
    pub fn is_active(&self) -> bool {
        self.status_or("ACTIVE").eq_ignore_ascii_case("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_account_response() {
        let account: Account = serde_json::from_value(json!({
            "id": 1,
            "userId": 4,
            "accountNumber": "APX-0001",
            "type": "CURRENT",
            "accountType": "CURRENT",
            "balance": 100.50,
            "status": "ACTIVE",
            "overdraftLimit": 500
        }))
        .unwrap();
        assert_eq!(account.id, Some(1));
        assert_eq!(account.type_label(), "CURRENT");
        assert_eq!(account.balance(), Decimal::new(10050, 2));
        assert_eq!(account.owner_ids(), vec![4]);
        assert_eq!(account.overdraft_limit, Some(Decimal::new(500, 0)));
        assert!(account.is_active());
    }

    #[test]
    fn test_balance_precedence() {
        let account: Account = serde_json::from_value(json!({
            "availableBalance": "20",
            "currentBalance": 30
        }))
        .unwrap();
        assert_eq!(account.balance(), Decimal::new(20, 0));

        let account: Account = serde_json::from_value(json!({"currentBalance": 30})).unwrap();
        assert_eq!(account.balance(), Decimal::new(30, 0));

        let account: Account = serde_json::from_value(json!({"balance": "lots"})).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_nested_customer_owner() {
        let account: Account = serde_json::from_value(json!({
            "type": "Savings",
            "customer": {"id": "9", "firstName": "Jane", "lastName": "Doe"}
        }))
        .unwrap();
        assert_eq!(account.owner_ids(), vec![9]);
        assert_eq!(account.owner_first_name(), Some("Jane"));
        assert_eq!(account.customer_display(), "Jane Doe");
    }

    #[test]
    fn test_malformed_fields_decode_as_absent() {
        let account: Account = serde_json::from_value(json!({
            "id": "abc",
            "customer": "someone",
            "accountNumber": null,
            "status": ""
        }))
        .unwrap();
        assert_eq!(account.id, None);
        assert_eq!(account.customer, None);
        assert_eq!(account.account_number, "");
        assert_eq!(account.status_or("Active"), "Active");
        assert_eq!(account.customer_display(), "N/A");
    }

    #[test]
    fn test_dormant_status() {
        let account: Account = serde_json::from_value(json!({"status": "dormant"})).unwrap();
        assert!(!account.is_active());
    }
}
