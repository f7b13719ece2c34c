use api::actions::{self, fallback};
use api::{AccountKind, Portfolio};
use dioxus::prelude::*;

use crate::session::{use_bank, use_session};
use crate::{format_money, LoggedInMenu, Route};

const RECENT_TRANSACTIONS: usize = 5;

/// Current/savings switch with the selected account's details and its most
/// recent transactions.
#[component]
pub fn AccountDetails() -> Element {
    let session = use_session();
    let client = use_bank();
    let mut kind = use_signal(|| AccountKind::Current);

    let accounts_client = client.clone();
    let portfolio = use_resource(move || {
        let client = accounts_client.clone();
        let user = session().user;
        async move {
            actions::load_portfolio(&client, user.as_ref())
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load accounts: {}", e);
                    e.display_message(fallback::LOAD_ACCOUNT_DETAILS)
                })
        }
    });

    let accounts = use_memo(move || match &*portfolio.read() {
        Some(Ok(accounts)) => accounts.clone(),
        _ => Portfolio::default(),
    });

    let active_id = use_memo(move || {
        let accounts = accounts.read();
        accounts
            .first_of(kind())
            .or_else(|| accounts.default_account())
            .and_then(|account| account.id)
    });

    let recent = use_resource(move || {
        let client = client.clone();
        let id = active_id();
        async move {
            let Some(id) = id else {
                return Ok(Vec::new());
            };
            match client.list_transactions(id).await {
                Ok(mut transactions) => {
                    transactions.truncate(RECENT_TRANSACTIONS);
                    Ok(transactions)
                }
                Err(e) => {
                    tracing::error!("Failed to load transactions for account {}: {}", id, e);
                    Err(e.display_message(fallback::LOAD_TRANSACTIONS))
                }
            }
        }
    });

    let loading = portfolio.read().is_none();
    let mut errors = Vec::new();
    if let Some(Err(message)) = &*portfolio.read() {
        errors.push(message.clone());
    }
    if let Some(Err(message)) = &*recent.read() {
        errors.push(message.clone());
    }
    let transactions = match &*recent.read() {
        Some(Ok(transactions)) => transactions.clone(),
        _ => Vec::new(),
    };

    let accounts = accounts();
    let current_id = accounts.current().and_then(|a| a.id);
    let savings_id = accounts.savings().and_then(|a| a.id);
    let active = active_id().and_then(|id| accounts.find(id)).cloned();

    rsx! {
        div {
            class: "account-page",
            LoggedInMenu {}
            h2 { "My Accounts" }

            for message in errors {
                p { class: "account-error", "{message}" }
            }

            if loading {
                p { "Loading accounts..." }
            } else if accounts.is_empty() {
                p { "No current or savings accounts available yet." }
            } else {
                div {
                    class: "account-type-switch",
                    if current_id.is_some() {
                        button {
                            class: if active_id() == current_id { "account-type-btn active" } else { "account-type-btn" },
                            onclick: move |_| kind.set(AccountKind::Current),
                            "Current Account"
                        }
                    }
                    if savings_id.is_some() {
                        button {
                            class: if active_id() == savings_id { "account-type-btn active" } else { "account-type-btn" },
                            onclick: move |_| kind.set(AccountKind::Savings),
                            "Savings Account"
                        }
                    }
                }

                if let Some(account) = active {
                    div {
                        class: "account-details-card",
                        h3 { "{account.type_label()}" }

                        div {
                            class: "details-row",
                            span { "Customer" }
                            strong { "{account.customer_display()}" }
                        }
                        div {
                            class: "details-row",
                            span { "Account Number" }
                            strong { "{account.account_number}" }
                        }
                        div {
                            class: "details-row",
                            span { "Status" }
                            strong {
                                class: if account.is_active() { "status active" } else { "status dormant" },
                                {account.status_or("ACTIVE").to_string()}
                            }
                        }

                        div {
                            class: "balance-box",
                            p { "Available Balance" }
                            h1 { {format_money(account.balance())} }
                        }

                        Link {
                            class: "open-transactions-link",
                            to: Route::Transactions {
                                account_id: account.id.map(|id| id.to_string()).unwrap_or_default(),
                            },
                            "Deposit / Withdraw and View Full History"
                        }

                        div {
                            class: "account-history-preview",
                            h4 { "Recent Transactions" }
                            if transactions.is_empty() {
                                p { "No transactions yet." }
                            } else {
                                ul {
                                    for (index, tx) in transactions.iter().enumerate() {
                                        li {
                                            key: "{tx.render_key(index)}",
                                            span { "{tx.label()}" }
                                            span { {format_money(tx.amount())} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
