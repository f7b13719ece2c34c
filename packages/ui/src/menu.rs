use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::session::{session_handle, use_session, SessionState};
use crate::{Icon, Route};

/// Navigation bar shown on the signed-in pages.
#[component]
pub fn LoggedInMenu() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let on_logout = move |_| {
        if let Err(e) = api::actions::logout(session_handle().store()) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        session.set(SessionState::default());
        nav.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "loggedin-menu",
            Link { class: "menu-link", to: Route::Landing {}, "Home" }
            Link { class: "menu-link", to: Route::Dashboard {}, "Dashboard" }
            Link { class: "menu-link", to: Route::AccountDetails {}, "Account Details" }
            Link {
                class: "menu-link",
                to: Route::Transactions { account_id: String::new() },
                "Transactions"
            }
            Link { class: "menu-link", to: Route::SavingsBenefits {}, "Savings Benefits" }
            Link { class: "menu-link", to: Route::CreateAccount {}, "Create Account" }
            button {
                r#type: "button",
                class: "menu-logout-btn",
                onclick: on_logout,
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                "Logout"
            }
        }
    }
}
