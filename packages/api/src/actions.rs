//! # Page-level actions
//!
//! The flows behind each page: validate the input, call the backend, persist
//! the session where needed, and re-fetch what the page shows. Validation
//! failures return before any request is made. Nothing is retried or rolled
//! back; the caller renders the error with [`ApiError::display_message`] and
//! one of the fallbacks in [`fallback`].

use rust_decimal::Decimal;
use store::{AuthenticatedUser, SessionStore};

use crate::client::BankClient;
use crate::error::ApiError;
use crate::models::{Account, Transaction};
use crate::portfolio::Portfolio;
use crate::validate::{parse_amount, LoginForm, NewAccountForm, TransferRequest, ValidationError};

/// Fallback messages shown when an error carries nothing better.
pub mod fallback {
    pub const LOAD_BALANCE: &str = "Failed to load account balance";
    pub const LOAD_ACCOUNTS: &str = "Failed to load accounts";
    pub const LOAD_TRANSACTIONS: &str = "Failed to load transactions";
    pub const LOAD_ACCOUNT_DETAILS: &str = "Failed to load account details";
    pub const DEPOSIT: &str = "Deposit failed";
    pub const WITHDRAW: &str = "Withdraw failed";
    pub const TRANSFER: &str = "Transfer failed";
    pub const LOGIN: &str = "Invalid login details";
    pub const CREATE_ACCOUNT: &str = "Something went wrong";
}

/// What the transactions page shows for the selected account.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountView {
    pub account: Account,
    pub balance: Decimal,
    pub transactions: Vec<Transaction>,
    pub portfolio: Portfolio,
}

/// Result of opening a new account.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountCreation {
    pub account: Account,
    pub user: AuthenticatedUser,
}

impl AccountCreation {
    /// Customer line for the confirmation card.
    pub fn customer_name(&self) -> &str {
        self.account
            .customer_name
            .as_deref()
            .or(self.user.customer_name.as_deref())
            .unwrap_or("")
    }
}

/// Log in and persist the returned user.
///
/// Names the backend leaves out are filled from the submitted form.
pub async fn login(
    client: &BankClient,
    store: &dyn SessionStore,
    form: &LoginForm,
) -> Result<AuthenticatedUser, ApiError> {
    let request = form.normalized()?;
    let mut user = client.login(&request).await?;
    if user.first_name.trim().is_empty() {
        user.first_name = request.first_name.clone();
    }
    if user.last_name.trim().is_empty() {
        user.last_name = request.last_name.clone();
    }
    store.save(&user)?;
    tracing::info!("Logged in as {}", user.display_name());
    Ok(user)
}

/// Open an account and sign in as its owner.
pub async fn create_account(
    client: &BankClient,
    store: &dyn SessionStore,
    form: &NewAccountForm,
) -> Result<AccountCreation, ApiError> {
    let request = form.normalized()?;
    let account = client.create_account(&request).await?;
    if account.account_number.trim().is_empty() {
        return Err(ApiError::MissingAccountNumber);
    }

    let user = AuthenticatedUser {
        user_id: account.user_id,
        customer_id: account.customer_id,
        account_id: account.id,
        first_name: request.first_name,
        last_name: request.last_name,
        customer_name: Some(request.customer_name),
        ..AuthenticatedUser::default()
    };
    store.save(&user)?;
    tracing::info!("Opened account {}", account.account_number);
    Ok(AccountCreation { account, user })
}

/// Forget the cached user.
pub fn logout(store: &dyn SessionStore) -> Result<(), ApiError> {
    store.clear()?;
    Ok(())
}

/// The user's accounts. Signed out: empty, without a request.
pub async fn load_portfolio(
    client: &BankClient,
    user: Option<&AuthenticatedUser>,
) -> Result<Portfolio, ApiError> {
    let Some(user) = user else {
        return Ok(Portfolio::default());
    };
    let accounts = client.list_accounts(user.primary_id()).await?;
    Ok(Portfolio::for_user(accounts, Some(user)))
}

/// Refresh everything the transactions page shows for one account.
pub async fn load_account_view(
    client: &BankClient,
    user: Option<&AuthenticatedUser>,
    account_id: i64,
) -> Result<AccountView, ApiError> {
    let owner = user.and_then(AuthenticatedUser::primary_id);
    let snapshot = client.snapshot(account_id, owner).await?;
    Ok(AccountView {
        balance: snapshot.account.balance(),
        account: snapshot.account,
        transactions: snapshot.transactions,
        portfolio: Portfolio::for_user(snapshot.accounts, user),
    })
}

pub async fn deposit(
    client: &BankClient,
    user: Option<&AuthenticatedUser>,
    account_id: Option<i64>,
    raw_amount: &str,
) -> Result<AccountView, ApiError> {
    let amount = parse_amount(raw_amount)?;
    let account_id = account_id.ok_or(ValidationError::NoAccountSelected)?;
    client.deposit(account_id, amount).await?;
    load_account_view(client, user, account_id).await
}

pub async fn withdraw(
    client: &BankClient,
    user: Option<&AuthenticatedUser>,
    account_id: Option<i64>,
    raw_amount: &str,
) -> Result<AccountView, ApiError> {
    let amount = parse_amount(raw_amount)?;
    let account_id = account_id.ok_or(ValidationError::NoAccountSelected)?;
    client.withdraw(account_id, amount).await?;
    load_account_view(client, user, account_id).await
}

pub async fn transfer(
    client: &BankClient,
    user: Option<&AuthenticatedUser>,
    from: Option<i64>,
    to: Option<i64>,
    raw_amount: &str,
) -> Result<AccountView, ApiError> {
    let request = TransferRequest::new(from, to, raw_amount)?;
    client.transfer(&request).await?;
    load_account_view(client, user, request.from_account_id).await
}
