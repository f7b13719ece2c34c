//! # Response envelopes
//!
//! List endpoints answer either with a bare JSON array or with the array
//! wrapped in an object, under the collection's own key (`accounts`,
//! `transactions`) or under a generic `data` key. [`extract_list`] accepts all
//! three; anything else degrades to an empty list, which callers must show as
//! a normal empty state.
//!
//! [`ResponseMode::Strict`] is the opt-in alternative: an unrecognized
//! envelope or an undecodable record becomes an [`ApiError`] instead.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Which collection a list response is expected to carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Envelope {
    Accounts,
    Transactions,
}

impl Envelope {
    /// The collection-specific wrapper key.
    pub fn key(self) -> &'static str {
        match self {
            Envelope::Accounts => "accounts",
            Envelope::Transactions => "transactions",
        }
    }
}

/// How tolerant decoding is of unexpected response shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    #[default]
    Lenient,
    Strict,
}

impl ResponseMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ResponseMode::Strict
        } else {
            ResponseMode::Lenient
        }
    }
}

/// The list inside `value`, or `None` when the shape is not recognized.
pub fn try_extract_list(value: Value, envelope: Envelope) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove(envelope.key()) {
                return Some(items);
            }
            match map.remove("data") {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            }
        }
        _ => None,
    }
}

/// The list inside `value`; unrecognized shapes yield an empty list.
pub fn extract_list(value: Value, envelope: Envelope) -> Vec<Value> {
    try_extract_list(value, envelope).unwrap_or_default()
}

/// Unwrap a single record sent as `{ "account": {...} }`.
pub fn extract_record(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("account").is_some_and(Value::is_object) => {
            map.remove("account").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Extract and decode a list response according to `mode`.
pub fn decode_list<T>(value: Value, envelope: Envelope, mode: ResponseMode) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    let items = match mode {
        ResponseMode::Lenient => extract_list(value, envelope),
        ResponseMode::Strict => try_extract_list(value, envelope)
            .ok_or(ApiError::UnexpectedShape(envelope.key()))?,
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) if mode == ResponseMode::Lenient => {
                tracing::warn!("Skipping {} record {}: {}", envelope.key(), index, e);
            }
            Err(e) => return Err(ApiError::Decode(e.to_string())),
        }
    }
    Ok(records)
}
