//! Account-type classification by substring match on the free-text type.

use std::fmt;

use crate::models::Account;

/// The two account categories the client recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Current,
    Savings,
}

impl AccountKind {
    /// Wire code sent to the backend on account creation.
    pub fn code(self) -> &'static str {
        match self {
            AccountKind::Current => "CURRENT",
            AccountKind::Savings => "SAVINGS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Current => "Current Account",
            AccountKind::Savings => "Savings Account",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CURRENT" => Some(AccountKind::Current),
            "SAVINGS" => Some(AccountKind::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify free text: "current" anywhere wins over "saving".
pub fn classify_label(label: &str) -> Option<AccountKind> {
    let label = label.trim().to_lowercase();
    if label.contains("current") {
        Some(AccountKind::Current)
    } else if label.contains("saving") {
        Some(AccountKind::Savings)
    } else {
        None
    }
}

/// Classify an account by its type field. `None` means unrecognized.
pub fn classify(account: &Account) -> Option<AccountKind> {
    classify_label(account.type_label())
}
