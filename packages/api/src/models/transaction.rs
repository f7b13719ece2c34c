//! # Transaction record
//!
//! | Quantity | Sources, in precedence order |
//! |----------|------------------------------|
//! | type | `type`, `transactionType`, else "Transaction" |
//! | amount | `amount`, `value`, else 0 |
//! | time | `timestamp`, `date`, `createdAt` |

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use store::models::lenient;

use super::money;

const DISPLAY_FORMAT: &str = "%d %b %Y, %H:%M";

/// A single entry from `GET /accounts/{id}/transactions`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::positive_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub r#type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub transaction_type: Option<String>,
    #[serde(default, deserialize_with = "money")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "money")]
    pub value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub reference: Option<String>,
}

impl Transaction {
    pub fn label(&self) -> &str {
        self.r#type
            .as_deref()
            .or(self.transaction_type.as_deref())
            .unwrap_or("Transaction")
    }

    pub fn amount(&self) -> Decimal {
        self.amount.or(self.value).unwrap_or(Decimal::ZERO)
    }

    /// Withdrawals are rendered apart from every other entry.
    pub fn is_withdrawal(&self) -> bool {
        self.label().trim().to_lowercase().starts_with("withdraw")
    }

    pub fn occurred_at(&self) -> Option<&str> {
        self.timestamp
            .as_deref()
            .or(self.date.as_deref())
            .or(self.created_at.as_deref())
    }

    /// Human-readable time. Unparseable timestamps are shown verbatim.
    pub fn display_time(&self) -> String {
        let Some(raw) = self.occurred_at() else {
            return "N/A".to_string();
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
        if let Ok(dt) = raw.parse::<NaiveDateTime>() {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
        raw.to_string()
    }

    /// Stable key for list rendering: the id, else the position.
    pub fn render_key(&self, index: usize) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => format!("{}-{index}", self.label().to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_transaction() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 3,
            "type": "WITHDRAW",
            "amount": 25,
            "timestamp": "2025-03-01T09:30:00",
            "reference": "ATM"
        }))
        .unwrap();
        assert_eq!(tx.label(), "WITHDRAW");
        assert!(tx.is_withdrawal());
        assert_eq!(tx.amount(), Decimal::new(25, 0));
        assert_eq!(tx.display_time(), "01 Mar 2025, 09:30");
        assert_eq!(tx.render_key(0), "3");
    }

    #[test]
    fn test_fallback_fields() {
        let tx: Transaction = serde_json::from_value(json!({
            "transactionType": "deposit",
            "value": "12.5",
            "createdAt": "yesterday"
        }))
        .unwrap();
        assert_eq!(tx.label(), "deposit");
        assert!(!tx.is_withdrawal());
        assert_eq!(tx.amount(), Decimal::new(125, 1));
        assert_eq!(tx.display_time(), "yesterday");
        assert_eq!(tx.render_key(4), "deposit-4");
    }

    #[test]
    fn test_empty_transaction() {
        let tx: Transaction = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tx.label(), "Transaction");
        assert_eq!(tx.amount(), Decimal::ZERO);
        assert_eq!(tx.display_time(), "N/A");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let tx: Transaction =
            serde_json::from_value(json!({"date": "2024-12-24T18:05:00Z"})).unwrap();
        assert_eq!(tx.display_time(), "24 Dec 2024, 18:05");
    }
}
