//! # HTTP client for the banking backend
//!
//! [`BankClient`] wraps a shared `reqwest::Client` and the configured base
//! URL. The raw layer ([`get_json`](BankClient::get_json) /
//! [`post_json`](BankClient::post_json)) returns whatever JSON the backend
//! sent; the typed methods on top run it through [`crate::envelope`] and the
//! record models.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`create_account`](BankClient::create_account) | `POST /accounts` |
//! | [`login`](BankClient::login) | `POST /login` |
//! | [`list_accounts`](BankClient::list_accounts) | `GET /accounts[?userId=]` |
//! | [`get_account`](BankClient::get_account) | `GET /accounts/{id}` |
//! | [`list_transactions`](BankClient::list_transactions) | `GET /accounts/{id}/transactions` |
//! | [`deposit`](BankClient::deposit) | `POST /accounts/{id}/deposit` |
//! | [`withdraw`](BankClient::withdraw) | `POST /accounts/{id}/withdraw` |
//! | [`transfer`](BankClient::transfer) | `POST /accounts/transfer` |
//!
//! No timeouts or retries are configured; requests use the transport's
//! defaults (the browser's `fetch` on the web).

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use store::config::ApiConfig;
use store::AuthenticatedUser;

use crate::envelope::{decode_list, extract_record, Envelope, ResponseMode};
use crate::error::{ApiError, ResponseBody};
use crate::models::{Account, Transaction};
use crate::validate::{AmountRequest, LoginRequest, NewAccountRequest, TransferRequest};

/// Banking backend client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct BankClient {
    inner: Arc<BankClientInner>,
}

impl PartialEq for BankClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

struct BankClientInner {
    http: reqwest::Client,
    base_url: String,
    mode: ResponseMode,
    scope_to_user: bool,
}

/// One account, its history and the full account list, fetched together.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSnapshot {
    pub account: Account,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
}

impl BankClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(BankClientInner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                mode: ResponseMode::from_strict(config.strict_envelopes),
                scope_to_user: config.scope_to_user,
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    #[must_use]
    pub fn mode(&self) -> ResponseMode {
        self.inner.mode
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Backend answered {}: {}", status, text);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: ResponseBody::from_text(text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)))
    }

    /// `GET` a path below the base URL and return the JSON body.
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        self.send(self.inner.http.get(url)).await
    }

    /// `POST` a JSON body to a path below the base URL.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        self.send(self.inner.http.post(url).json(body)).await
    }

    pub async fn create_account(&self, request: &NewAccountRequest) -> Result<Account, ApiError> {
        let value = self.post_json("/accounts", request).await?;
        decode_record(extract_record(value))
    }

    /// Log in. The response is whatever user-like object the backend sends;
    /// a body that is not an object decodes to an empty user.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthenticatedUser, ApiError> {
        match self.post_json("/login", request).await? {
            value @ Value::Object(_) => decode_record(value),
            _ => Ok(AuthenticatedUser::default()),
        }
    }

    /// List accounts. `owner` is sent as `?userId=` when scoping is enabled.
    pub async fn list_accounts(&self, owner: Option<i64>) -> Result<Vec<Account>, ApiError> {
        let path = match owner {
            Some(id) if self.inner.scope_to_user => format!("/accounts?userId={id}"),
            _ => "/accounts".to_string(),
        };
        let value = self.get_json(&path).await?;
        decode_list(value, Envelope::Accounts, self.inner.mode)
    }

    pub async fn get_account(&self, id: i64) -> Result<Account, ApiError> {
        let value = self.get_json(&format!("/accounts/{id}")).await?;
        decode_record(extract_record(value))
    }

    pub async fn list_transactions(&self, account_id: i64) -> Result<Vec<Transaction>, ApiError> {
        let value = self
            .get_json(&format!("/accounts/{account_id}/transactions"))
            .await?;
        decode_list(value, Envelope::Transactions, self.inner.mode)
    }

    pub async fn deposit(&self, account_id: i64, amount: Decimal) -> Result<(), ApiError> {
        self.post_json(
            &format!("/accounts/{account_id}/deposit"),
            &AmountRequest { amount },
        )
        .await?;
        Ok(())
    }

    pub async fn withdraw(&self, account_id: i64, amount: Decimal) -> Result<(), ApiError> {
        self.post_json(
            &format!("/accounts/{account_id}/withdraw"),
            &AmountRequest { amount },
        )
        .await?;
        Ok(())
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.post_json("/accounts/transfer", request).await?;
        Ok(())
    }

    /// Fetch the account, its transactions and the account list concurrently.
    /// Fails as soon as any of the three fails.
    pub async fn snapshot(
        &self,
        account_id: i64,
        owner: Option<i64>,
    ) -> Result<AccountSnapshot, ApiError> {
        let (account, transactions, accounts) = futures::try_join!(
            self.get_account(account_id),
            self.list_transactions(account_id),
            self.list_accounts(owner),
        )?;
        Ok(AccountSnapshot {
            account,
            transactions,
            accounts,
        })
    }
}

fn decode_record<T>(value: Value) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = BankClient::new(&ApiConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/accounts/3"), "http://localhost:8080/api/accounts/3");
        assert_eq!(client.url("login"), "http://localhost:8080/api/login");
        assert_eq!(client.mode(), ResponseMode::Lenient);
    }
}
