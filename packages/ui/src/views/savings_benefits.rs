use dioxus::prelude::*;

use crate::LoggedInMenu;

struct Benefit {
    name: &'static str,
    details: &'static str,
    eligible: bool,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        name: "Retail Discounts",
        details: "Exclusive discounts at lidl supermarkets",
        eligible: true,
    },
    Benefit {
        name: "Cashback on Purchases",
        details: "Enjoy Cashbacks on all purchases from zabka.",
        eligible: true,
    },
    Benefit {
        name: "Free holiday",
        details: "Earn a free holiday to anywhere in europe.",
        eligible: false,
    },
    Benefit {
        name: "Partner Store Discounts",
        details: "Exclusive discounts at partner stores and merchants.",
        eligible: true,
    },
];

#[component]
pub fn SavingsBenefits() -> Element {
    rsx! {
        div {
            class: "benefits-page",
            LoggedInMenu {}

            div {
                class: "benefits-banner",
                h2 { "Savings Account Benefits" }
                p {
                    "As a Savings Account customer, you enjoy exclusive rewards designed to help you "
                    "save more and earn more."
                }
            }

            div {
                class: "benefits-list",
                for benefit in BENEFITS.iter() {
                    div {
                        key: "{benefit.name}",
                        class: "benefit-row",
                        div {
                            h4 { "{benefit.name}" }
                            p { "{benefit.details}" }
                        }
                        span {
                            class: if benefit.eligible { "badge eligible" } else { "badge not-eligible" },
                            if benefit.eligible { "Eligible" } else { "Not Eligible" }
                        }
                    }
                }
            }
        }
    }
}
