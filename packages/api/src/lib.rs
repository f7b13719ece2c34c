//! # API crate: backend client and account logic for Apex Bank
//!
//! Everything the views need to talk to the banking backend and to turn its
//! loosely shaped responses into something displayable. Nothing here renders;
//! the `ui` crate calls into these modules from its components.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`BankClient`]: one method per backend endpoint, plus the concurrent [`BankClient::snapshot`] |
//! | [`envelope`] | Pulls record lists out of bare or wrapped (`accounts` / `transactions` / `data`) response bodies |
//! | [`error`] | [`ApiError`] and the display-message extraction chain |
//! | [`models`] | [`Account`] and [`Transaction`] with lenient multi-name field decoding |
//! | [`classify`] | Maps a free-text account type to [`AccountKind`] |
//! | [`ownership`] | Heuristic "does this account look like mine" check |
//! | [`portfolio`] | The user's CURRENT/SAVINGS accounts and the quantities pages derive from them |
//! | [`validate`] | Form normalization and amount parsing, run before any request |
//! | [`actions`] | Page-level flows: validate, call the backend, persist the session, re-fetch |
//!
//! The backend is the only source of truth. Ownership matching is a display
//! filter, not access control.

pub mod actions;
pub mod classify;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod ownership;
pub mod portfolio;
pub mod validate;

pub use classify::{classify, AccountKind};
pub use client::{AccountSnapshot, BankClient};
pub use envelope::{Envelope, ResponseMode};
pub use error::{ApiError, ResponseBody};
pub use models::{Account, Transaction};
pub use ownership::account_belongs_to;
pub use portfolio::Portfolio;
pub use validate::{LoginForm, NewAccountForm, ValidationError};

pub use rust_decimal::Decimal;
pub use store::{ApexConfig, AuthenticatedUser, SessionStore};
