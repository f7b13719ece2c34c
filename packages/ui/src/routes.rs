use api::ApexConfig;
use dioxus::prelude::*;

use crate::views::{AccountDetails, CreateAccount, Dashboard, Landing, Login, SavingsBenefits, Transactions};
use crate::{BankProvider, MAIN_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/create-account")]
    CreateAccount {},
    #[route("/accounts")]
    Dashboard {},
    #[route("/account-details")]
    AccountDetails {},
    #[route("/transactions?:account_id")]
    Transactions { account_id: String },
    #[route("/savings-benefits")]
    SavingsBenefits {},
}

/// Application root.
///
/// Uses the [`ApexConfig`] put in the root context by the launcher, or the
/// defaults when there is none.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| try_consume_context::<ApexConfig>().unwrap_or_default());

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        BankProvider {
            config,
            Router::<Route> {}
        }
    }
}
