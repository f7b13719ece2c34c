use api::actions::{self, fallback};
use api::Portfolio;
use dioxus::prelude::*;

use crate::icons::{FaCreditCard, FaEllipsis, FaMoneyBillTransfer, FaReceipt};
use crate::session::{use_bank, use_config, use_session};
use crate::{format_money, AdCarousel, Icon, LoggedInMenu, Route};

/// Signed-in landing page: greeting, rotating ads, total balance and a
/// summary of the default account.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let client = use_bank();
    let config = use_config();

    let portfolio = use_resource(move || {
        let client = client.clone();
        let user = session().user;
        async move {
            actions::load_portfolio(&client, user.as_ref())
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load accounts: {}", e);
                    e.display_message(fallback::LOAD_BALANCE)
                })
        }
    });

    let loading = portfolio.read().is_none();
    let error = match &*portfolio.read() {
        Some(Err(message)) => Some(message.clone()),
        _ => None,
    };
    let accounts = match &*portfolio.read() {
        Some(Ok(accounts)) => accounts.clone(),
        _ => Portfolio::default(),
    };
    let selected = accounts.default_account().cloned();
    let transactions_route = Route::Transactions {
        account_id: selected
            .as_ref()
            .and_then(|account| account.id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    };
    let display_name = session().display_name();

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-container",
                LoggedInMenu {}

                div {
                    class: "top-bar",
                    div {
                        class: "brand-section",
                        h1 { class: "brand", "APEX" }
                        div {
                            class: "profile",
                            span { class: "greeting", "Good day, {display_name}" }
                        }
                    }
                    div {
                        class: "top-actions",
                        Link { class: "home-btn", to: Route::Landing {}, "Home" }
                    }
                }

                AdCarousel { interval_secs: config.dashboard.ad_rotation_secs }

                div {
                    class: "balance-card",
                    p { "Total Balance" }
                    h1 { {format_money(accounts.total_balance())} }
                    if loading {
                        small { "Loading balance from backend..." }
                    }
                    if let Some(message) = error {
                        small { class: "balance-error", "{message}" }
                    }
                }

                div {
                    class: "actions",
                    div {
                        class: "action",
                        Icon { icon: FaCreditCard, width: 20, height: 20 }
                        p { "BLIK" }
                    }
                    Link {
                        class: "action",
                        to: transactions_route.clone(),
                        Icon { icon: FaMoneyBillTransfer, width: 20, height: 20 }
                        p { "Transfer" }
                    }
                    Link {
                        class: "action",
                        to: transactions_route,
                        Icon { icon: FaReceipt, width: 20, height: 20 }
                        p { "History" }
                    }
                    div {
                        class: "action",
                        Icon { icon: FaEllipsis, width: 20, height: 20 }
                        p { "More" }
                    }
                }

                div {
                    class: "transfer-link-row",
                    Link {
                        class: "open-transactions-link",
                        to: Route::AccountDetails {},
                        "Go to Account Details Page"
                    }
                }

                div {
                    class: "info-grid",
                    div {
                        class: "info-card",
                        p { "Account Type" }
                        h4 {
                            {selected.as_ref().map(|a| a.type_label().to_string()).unwrap_or_else(|| "N/A".to_string())}
                        }
                    }
                    div {
                        class: "info-card",
                        p { "Account Status" }
                        h4 {
                            {selected.as_ref().map(|a| a.status_or("Active").to_string()).unwrap_or_else(|| "Active".to_string())}
                        }
                    }
                    div {
                        class: "info-card",
                        p { "Linked Accounts" }
                        h4 { "{accounts.len()}" }
                    }
                }

                div {
                    class: "activity-card",
                    h3 { "Account Activity" }
                    ul {
                        li { "Transfers enabled" }
                        li { "Online payments enabled" }
                        li { "International access enabled" }
                        li { "Notifications active" }
                    }
                }

                div {
                    class: "support-card",
                    h3 { "Help and Security" }
                    p {
                        "Manage your security settings, update personal information, and control how your "
                        "account is accessed."
                    }
                    div {
                        class: "support-actions",
                        button { "Security Settings" }
                        button { "Contact Support" }
                    }
                }
            }
        }
    }
}
