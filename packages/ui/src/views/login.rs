use api::actions::{self, fallback};
use api::LoginForm;
use dioxus::prelude::*;

use crate::session::{bank_client, session_handle, use_session, SessionState};
use crate::Route;

/// Login page. On success the user is stored and sent to the dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            first_name: first_name(),
            last_name: last_name(),
            password: password(),
        };
        let client = bank_client();
        let sessions = session_handle();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let result = actions::login(&client, sessions.store(), &form).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    session.set(SessionState::signed_in(user));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.display_message(fallback::LOGIN)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page-container",
            form {
                class: "login-page-card",
                onsubmit: on_submit,

                h2 { "Login" }
                p { class: "login-subtitle", "Enter your details to continue" }

                if let Some(message) = error() {
                    div { class: "login-error", "{message}" }
                }

                label { "First Name" }
                input {
                    r#type: "text",
                    name: "firstName",
                    required: true,
                    value: first_name(),
                    oninput: move |evt| first_name.set(evt.value()),
                }

                label { "Last Name" }
                input {
                    r#type: "text",
                    name: "lastName",
                    required: true,
                    value: last_name(),
                    oninput: move |evt| last_name.set(evt.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    name: "password",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }

                Link {
                    class: "login-create-link",
                    to: Route::CreateAccount {},
                    "Need an account? Create one"
                }
            }
        }
    }
}
