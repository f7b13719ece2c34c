use std::path::{Path, PathBuf};

use api::ApexConfig;
use dioxus::prelude::*;

fn main() {
    dioxus::launch(DesktopApp);
}

/// Loads `apex.toml` once the logger is up, then hands over to the shared app.
#[component]
fn DesktopApp() -> Element {
    use_context_provider(|| match config_path() {
        Some(path) => load_config(&path),
        None => ApexConfig::default(),
    });

    rsx! {
        ui::App {}
    }
}

/// `<config_dir>/apex-bank/apex.toml`
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("apex-bank").join(ApexConfig::filename()))
}

/// Read the config file, falling back to the defaults when it is missing or
/// unreadable.
fn load_config(path: &Path) -> ApexConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ApexConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return ApexConfig::default();
        }
    };
    match ApexConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Using backend at {}", config.api.base_url);
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            ApexConfig::default()
        }
    }
}
