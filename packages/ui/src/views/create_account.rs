use api::actions::{self, fallback, AccountCreation};
use api::{AccountKind, NewAccountForm};
use dioxus::prelude::*;

use crate::session::{bank_client, session_handle, use_session, SessionState};
use crate::{format_money, Route};

/// Account opening form. The new owner is signed in on success.
#[component]
pub fn CreateAccount() -> Element {
    let mut session = use_session();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut kind = use_signal(|| AccountKind::Current);
    let mut overdraft_limit = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut created = use_signal(|| Option::<AccountCreation>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = NewAccountForm {
            first_name: first_name(),
            last_name: last_name(),
            password: password(),
            kind: kind(),
            overdraft_limit: overdraft_limit(),
        };
        let client = bank_client();
        let sessions = session_handle();
        spawn(async move {
            loading.set(true);
            error.set(None);
            created.set(None);
            match actions::create_account(&client, sessions.store(), &form).await {
                Ok(creation) => {
                    session.set(SessionState::signed_in(creation.user.clone()));
                    created.set(Some(creation));
                }
                Err(e) => {
                    tracing::warn!("Account creation failed: {}", e);
                    error.set(Some(e.display_message(fallback::CREATE_ACCOUNT)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "create-account-container",
            form {
                class: "create-account-card",
                onsubmit: on_submit,

                h2 { "Create a New Account" }
                p { class: "subtitle", "Open a secure account with Apex Bank" }

                if let Some(message) = error() {
                    div { class: "error", "{message}" }
                }

                label { "First Name" }
                input {
                    r#type: "text",
                    placeholder: "John",
                    required: true,
                    value: first_name(),
                    oninput: move |evt| first_name.set(evt.value()),
                }

                label { "Last Name" }
                input {
                    r#type: "text",
                    placeholder: "Doe",
                    required: true,
                    value: last_name(),
                    oninput: move |evt| last_name.set(evt.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    placeholder: "Create a password",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                label { "Account Type" }
                select {
                    value: kind().code(),
                    onchange: move |evt| {
                        kind.set(AccountKind::from_code(&evt.value()).unwrap_or(AccountKind::Current));
                    },
                    option { value: "CURRENT", "Current Account" }
                    option { value: "SAVINGS", "Savings Account" }
                }

                if kind() == AccountKind::Current {
                    label { "Overdraft Limit (£)" }
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "500",
                        value: overdraft_limit(),
                        oninput: move |evt| overdraft_limit.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create Account" }
                }

                if let Some(creation) = created() {
                    div {
                        class: "account-output",
                        h3 { "Account Created" }
                        p {
                            strong { "Customer: " }
                            "{creation.customer_name()}"
                        }
                        p {
                            strong { "Account ID: " }
                            {creation.account.id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string())}
                        }
                        p {
                            strong { "Account Number: " }
                            "{creation.account.account_number}"
                        }
                        p {
                            strong { "Type: " }
                            "{creation.account.type_label()}"
                        }
                        p {
                            strong { "Overdraft Limit: " }
                            {creation.account.overdraft_limit.map(format_money).unwrap_or_else(|| "N/A".to_string())}
                        }
                        Link {
                            class: "account-page-link",
                            to: Route::Dashboard {},
                            "Go to Account Page"
                        }
                    }
                }

                Link { class: "back-link", to: Route::Landing {}, "Back to Home" }
            }
        }
    }
}
