use dioxus::prelude::*;

use crate::Route;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            class: "landing-page",

            header {
                class: "landing-topbar",
                div {
                    class: "brand-box",
                    span { class: "brand-mark", "A" }
                    span { class: "brand-name", "Apex Bank" }
                }
                nav {
                    class: "top-nav",
                    a { href: "#open-account", "How to create an account" }
                }
                div {
                    class: "top-actions",
                    Link { class: "top-create-btn", to: Route::CreateAccount {}, "Create account" }
                    Link { class: "top-login-btn", to: Route::Login {}, "Log in" }
                }
            }

            section {
                class: "hero-section",
                div {
                    class: "hero-panel",
                    p { class: "hero-kicker", "Apex account" }
                    h1 { "Open an account and gain more" }
                    p { class: "hero-subtitle", "Get started in minutes and unlock exclusive welcome benefits." }
                    div { class: "promo-chip", "Promotions" }
                    div {
                        class: "hero-offer",
                        div {
                            strong { "£800" }
                            span { "activity bonus" }
                        }
                        span { class: "offer-plus", "+" }
                        div {
                            strong { "5%" }
                            span { "on deposit for you" }
                        }
                    }
                    Link { class: "hero-cta", to: Route::CreateAccount {}, "Open an Apex Account" }
                }
            }

            section {
                id: "open-account",
                class: "how-to-section",
                h2 { "How to create an account" }
                ol {
                    li { "Choose a Current or Savings account." }
                    li { "Enter your first name, last name and a password." }
                    li { "Set an overdraft limit if you picked a Current account." }
                    li { "Sign in and start banking." }
                }
            }

            footer {
                class: "legal-footer",
                h3 { "Legal notice" }
                p {
                    "The organiser of this promotion is Apex Bank. You can join the \"up to £800 to start\" "
                    "promotion until 31 March 2026 if you open an account with a debit card and Apex online "
                    "services and do not already hold a £ account with us."
                }
                p {
                    "Interest on deposits is paid according to the account terms in force on the day it is "
                    "credited. Promotional rates apply to new funds only."
                }
            }
        }
    }
}
