use api::actions::{self, fallback, AccountView};
use api::{ApiError, Portfolio};
use dioxus::prelude::*;

use crate::session::{bank_client, use_bank, use_session};
use crate::{format_money, LoggedInMenu, Route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mutation {
    Deposit,
    Withdraw,
    Transfer,
}

impl Mutation {
    fn fallback(self) -> &'static str {
        match self {
            Mutation::Deposit => fallback::DEPOSIT,
            Mutation::Withdraw => fallback::WITHDRAW,
            Mutation::Transfer => fallback::TRANSFER,
        }
    }
}

/// Error line left after loading the selected account. A successful load
/// clears whatever an earlier account's failure put there.
fn account_load_error(result: &Result<AccountView, ApiError>) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|e| e.display_message(fallback::LOAD_TRANSACTIONS))
}

/// Account picker, balances, deposit/withdraw and transfer forms, and the
/// full history of the selected account.
///
/// `account_id` comes from the query string and preselects that account when
/// it is one of the user's.
#[component]
pub fn Transactions(account_id: String) -> Element {
    let session = use_session();
    let client = use_bank();
    let preselected = account_id.trim().parse::<i64>().ok();

    let mut portfolio = use_signal(Portfolio::default);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut target = use_signal(|| Option::<i64>::None);
    let mut view = use_signal(|| Option::<AccountView>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut submitting = use_signal(|| false);
    let mut amount = use_signal(String::new);
    let mut transfer_amount = use_signal(String::new);

    let accounts_client = client.clone();
    let _accounts = use_resource(move || {
        let client = accounts_client.clone();
        let user = session().user;
        async move {
            match actions::load_portfolio(&client, user.as_ref()).await {
                Ok(loaded) => {
                    selected.set(loaded.initial_selection(preselected));
                    portfolio.set(loaded);
                }
                Err(e) => {
                    tracing::error!("Failed to load accounts: {}", e);
                    error.set(Some(e.display_message(fallback::LOAD_ACCOUNTS)));
                }
            }
            loading.set(false);
        }
    });

    // Restarting on a new selection drops the previous in-flight load.
    let _selected_account = use_resource(move || {
        let client = client.clone();
        let id = selected();
        async move {
            let Some(id) = id else {
                view.set(None);
                return;
            };
            let user = session.peek().user.clone();
            let result = actions::load_account_view(&client, user.as_ref(), id).await;
            if let Err(e) = &result {
                tracing::error!("Failed to load account {}: {}", id, e);
            }
            error.set(account_load_error(&result));
            if let Ok(loaded) = result {
                portfolio.set(loaded.portfolio.clone());
                view.set(Some(loaded));
            }
        }
    });

    use_effect(move || {
        let next = portfolio.read().resolve_target(*target.peek(), selected());
        if next != *target.peek() {
            target.set(next);
        }
    });

    let submit = move |mutation: Mutation| {
        let client = bank_client();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            let user = session.peek().user.clone();
            let result: Result<AccountView, ApiError> = match mutation {
                Mutation::Deposit => {
                    actions::deposit(&client, user.as_ref(), selected(), &amount()).await
                }
                Mutation::Withdraw => {
                    actions::withdraw(&client, user.as_ref(), selected(), &amount()).await
                }
                Mutation::Transfer => {
                    actions::transfer(&client, user.as_ref(), selected(), target(), &transfer_amount())
                        .await
                }
            };
            match result {
                Ok(loaded) => {
                    match mutation {
                        Mutation::Transfer => transfer_amount.set(String::new()),
                        _ => amount.set(String::new()),
                    }
                    portfolio.set(loaded.portfolio.clone());
                    view.set(Some(loaded));
                }
                Err(e) => {
                    if !e.is_validation() {
                        tracing::warn!("{:?} failed: {}", mutation, e);
                    }
                    error.set(Some(e.display_message(mutation.fallback())));
                }
            }
            submitting.set(false);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "transaction-page",
                h2 { "Account Transactions" }
                p { class: "empty", "Loading accounts..." }
            }
        };
    }

    let accounts = portfolio();
    let selected_account = selected().and_then(|id| accounts.find(id)).cloned();
    let targets: Vec<_> = accounts
        .transfer_targets(selected())
        .into_iter()
        .cloned()
        .collect();
    let balance = view().map(|v| v.balance).unwrap_or_default();
    let history = view().map(|v| v.transactions).unwrap_or_default();
    let option_label = |account: &api::Account| {
        format!("{} - {}", account.type_label(), account.account_number)
    };

    rsx! {
        div {
            class: "transaction-page",
            LoggedInMenu {}
            h2 { "Account Transactions" }

            if let Some(message) = error() {
                p { class: "error-message", "{message}" }
            }

            if accounts.is_empty() {
                p { class: "empty", "No accounts available yet." }
            } else {
                div {
                    class: "account-picker",
                    label { r#for: "accountSelect", "Select Account" }
                    select {
                        id: "accountSelect",
                        value: selected().map(|id| id.to_string()).unwrap_or_default(),
                        onchange: move |evt| selected.set(evt.value().parse::<i64>().ok()),
                        for account in accounts.accounts().iter() {
                            option {
                                key: "{account.id.unwrap_or_default()}",
                                value: account.id.map(|id| id.to_string()).unwrap_or_default(),
                                {option_label(account)}
                            }
                        }
                        if !accounts.has_savings() {
                            option { value: "", disabled: true, "Savings Account - Not available" }
                        }
                    }
                }

                if let Some(account) = selected_account {
                    div {
                        class: "selected-account-meta",
                        p {
                            strong { "Account Number: " }
                            "{account.account_number}"
                        }
                        p {
                            strong { "Account Type: " }
                            "{account.type_label()}"
                        }
                    }
                }

                div {
                    class: "balance-card",
                    p { "Current Balance" }
                    h1 { {format_money(balance)} }
                    small {
                        "Total Available (Current + Savings): "
                        {format_money(accounts.total_balance())}
                    }
                }

                div {
                    class: "action-card",
                    input {
                        r#type: "number",
                        placeholder: "Enter amount",
                        value: amount(),
                        oninput: move |evt| amount.set(evt.value()),
                    }
                    div {
                        class: "buttons",
                        button {
                            disabled: submitting(),
                            onclick: move |_| submit(Mutation::Deposit),
                            if submitting() { "Processing..." } else { "Deposit" }
                        }
                        button {
                            class: "withdraw",
                            disabled: submitting(),
                            onclick: move |_| submit(Mutation::Withdraw),
                            if submitting() { "Processing..." } else { "Withdraw" }
                        }
                    }
                }

                div {
                    class: "action-card transfer-card",
                    h3 { "Move funds between your accounts" }
                    label { r#for: "targetAccountSelect", "Transfer to" }
                    select {
                        id: "targetAccountSelect",
                        disabled: targets.is_empty(),
                        value: target().map(|id| id.to_string()).unwrap_or_default(),
                        onchange: move |evt| target.set(evt.value().parse::<i64>().ok()),
                        if targets.is_empty() {
                            option { value: "", "No target account available" }
                        } else {
                            for account in targets.iter() {
                                option {
                                    key: "{account.id.unwrap_or_default()}",
                                    value: account.id.map(|id| id.to_string()).unwrap_or_default(),
                                    {option_label(account)}
                                }
                            }
                        }
                    }
                    input {
                        r#type: "number",
                        placeholder: "Transfer amount",
                        value: transfer_amount(),
                        oninput: move |evt| transfer_amount.set(evt.value()),
                    }
                    button {
                        disabled: submitting() || targets.is_empty() || target().is_none(),
                        onclick: move |_| submit(Mutation::Transfer),
                        if submitting() { "Processing..." } else { "Transfer Between Accounts" }
                    }
                }

                div {
                    class: "history-card",
                    h3 { "Transaction History" }
                    if history.is_empty() {
                        p { class: "empty", "No transactions yet" }
                    } else {
                        ul {
                            for (index, tx) in history.iter().enumerate() {
                                li {
                                    key: "{tx.render_key(index)}",
                                    span {
                                        class: if tx.is_withdrawal() { "withdraw" } else { "deposit" },
                                        "{tx.label()}"
                                    }
                                    span { {format_money(tx.amount())} }
                                    small { "{tx.display_time()}" }
                                }
                            }
                        }
                    }
                }
            }

            Link { class: "back-to-accounts-link", to: Route::AccountDetails {}, "Back to Account Details" }
        }
    }
}
