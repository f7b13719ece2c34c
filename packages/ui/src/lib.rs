//! This crate contains all shared UI for the workspace: the session context,
//! the page views and the route table the platform entry points launch.

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod session;
pub use session::{
    bank_client, make_session_store, session_handle, use_bank, use_config, use_session,
    BankProvider, SessionHandle, SessionState,
};

mod timer;

mod ads;
pub use ads::{AdCarousel, Advert, ADVERTS};

pub mod money;
pub use money::format_money;

mod menu;
pub use menu::LoggedInMenu;

pub mod views;

mod routes;
pub use routes::{App, Route};
