//! Rotating advertisement banner on the dashboard.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advert {
    pub title: &'static str,
    pub description: &'static str,
    pub legal: &'static str,
}

pub const ADVERTS: [Advert; 2] = [
    Advert {
        title: "Earn up to 5% per annum",
        description: "Save smarter with our Savings Account and enjoy competitive annual returns.",
        legal: "Terms and conditions apply.",
    },
    Advert {
        title: "Secure Savings Account",
        description: "Your funds are protected with bank-grade security and deposit insurance.",
        legal: "Savings are subject to bank policy.",
    },
];

fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Cycles through [`ADVERTS`] every `interval_secs` seconds; 0 keeps the
/// first slide.
///
/// The timer task belongs to this component and stops when it unmounts.
#[component]
pub fn AdCarousel(#[props(default = 6)] interval_secs: u32) -> Element {
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        if interval_secs == 0 {
            return;
        }
        let period = Duration::from_secs(u64::from(interval_secs));
        loop {
            sleep(period).await;
            let next = next_index(current(), ADVERTS.len());
            current.set(next);
        }
    });

    let advert = ADVERTS[current() % ADVERTS.len()];

    rsx! {
        div {
            class: "ads-slider",
            h3 { "{advert.title}" }
            p { "{advert.description}" }
            small { "{advert.legal}" }
        }
    }
}
