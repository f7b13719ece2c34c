//! Browser entry point. The session lives in `localStorage` and the backend
//! is reached at the default base URL.

fn main() {
    dioxus::launch(ui::App);
}
