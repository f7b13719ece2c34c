//! # Client-side validation
//!
//! Runs before any request is sent. Only presence and sign are checked; the
//! backend remains responsible for everything else.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::classify::AccountKind;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid amount")]
    InvalidAmount,

    #[error("Enter a valid transfer amount")]
    InvalidTransferAmount,

    #[error("Enter a valid overdraft limit")]
    InvalidOverdraft,

    #[error("First name, last name, and password are required")]
    MissingCredentials,

    #[error("Select an account first")]
    NoAccountSelected,

    #[error("Select both source and target accounts")]
    NoTarget,

    #[error("Choose a different account to transfer to")]
    SameAccount,
}

/// Parse a user-entered amount; it must be a number greater than zero.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}

fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl LoginForm {
    /// Trim and lowercase the names; every field is required.
    pub fn normalized(&self) -> Result<LoginRequest, ValidationError> {
        let first_name = normalize_name(&self.first_name);
        let last_name = normalize_name(&self.last_name);
        if first_name.is_empty() || last_name.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            first_name,
            last_name,
            password: self.password.clone(),
        })
    }
}

/// Raw create-account form input.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAccountForm {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub kind: AccountKind,
    /// Only read for current accounts. Blank means no overdraft.
    pub overdraft_limit: String,
}

impl Default for NewAccountForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            password: String::new(),
            kind: AccountKind::Current,
            overdraft_limit: String::new(),
        }
    }
}

/// Body of `POST /accounts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountRequest {
    pub customer_name: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub r#type: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub overdraft_limit: Option<Decimal>,
}

impl NewAccountForm {
    pub fn normalized(&self) -> Result<NewAccountRequest, ValidationError> {
        let first_name = normalize_name(&self.first_name);
        let last_name = normalize_name(&self.last_name);
        if first_name.is_empty() || last_name.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }

        let overdraft_limit = match self.kind {
            AccountKind::Savings => None,
            AccountKind::Current => {
                let raw = self.overdraft_limit.trim();
                if raw.is_empty() {
                    None
                } else {
                    match Decimal::from_str(raw) {
                        Ok(limit) if limit >= Decimal::ZERO => Some(limit),
                        _ => return Err(ValidationError::InvalidOverdraft),
                    }
                }
            }
        };

        Ok(NewAccountRequest {
            customer_name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            password: self.password.clone(),
            r#type: self.kind.code().to_string(),
            overdraft_limit,
        })
    }
}

/// Body of `POST /accounts/transfer`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: i64,
    pub to_account_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl TransferRequest {
    /// Validate a transfer between two of the user's accounts.
    pub fn new(
        from: Option<i64>,
        to: Option<i64>,
        raw_amount: &str,
    ) -> Result<Self, ValidationError> {
        let amount = parse_amount(raw_amount).map_err(|_| ValidationError::InvalidTransferAmount)?;
        let (Some(from_account_id), Some(to_account_id)) = (from, to) else {
            return Err(ValidationError::NoTarget);
        };
        if from_account_id == to_account_id {
            return Err(ValidationError::SameAccount);
        }
        Ok(Self {
            from_account_id,
            to_account_id,
            amount,
        })
    }
}

/// Body of `POST /accounts/{id}/deposit` and `/withdraw`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AmountRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
