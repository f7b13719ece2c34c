//! Session context and hooks for the UI.
//!
//! [`BankProvider`] owns three context values for the pages below it: the
//! [`BankClient`], the platform [`SessionHandle`] and the reactive
//! [`SessionState`] holding the signed-in user. The stored session is read
//! once, when the provider mounts.

use std::rc::Rc;

use api::{ApexConfig, AuthenticatedUser, BankClient, SessionStore};
use dioxus::prelude::*;

/// Who is signed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthenticatedUser>,
}

impl SessionState {
    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Greeting name, "Customer" when signed out.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(AuthenticatedUser::display_name)
            .unwrap_or_else(|| "Customer".to_string())
    }
}

/// Shared handle to the platform session store.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.0.as_ref()
    }
}

/// Create the session store for the current platform.
///
/// - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
/// - **Desktop** (native): `<data_dir>/apex-bank/` via [`store::FileStore`]
///
/// Falls back to an in-memory store when neither is available.
pub fn make_session_store() -> SessionHandle {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionHandle::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionHandle::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match dirs::data_dir() {
            Some(dir) => SessionHandle::new(store::FileStore::default_location(&dir)),
            None => {
                tracing::warn!("No data directory, session will not survive a restart");
                SessionHandle::new(store::MemoryStore::new())
            }
        }
    }
}

/// Get the session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_bank() -> BankClient {
    use_context::<BankClient>()
}

pub fn use_config() -> ApexConfig {
    use_context::<ApexConfig>()
}

/// The backend client, for use inside event handlers.
pub fn bank_client() -> BankClient {
    consume_context::<BankClient>()
}

/// The session store, for use inside event handlers.
pub fn session_handle() -> SessionHandle {
    consume_context::<SessionHandle>()
}

/// Provider component for the client, the session store and the session.
/// Wrap your app with this component.
#[component]
pub fn BankProvider(config: ApexConfig, children: Element) -> Element {
    let client = use_hook(|| match BankClient::new(&config.api) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {}", e);
            None
        }
    });

    match client {
        Some(client) => rsx! {
            SessionScope { client, config, {children} }
        },
        None => rsx! {
            div {
                class: "fatal-error",
                h2 { "Apex Bank is unavailable" }
                p { "The banking service could not be reached from this device." }
            }
        },
    }
}

#[component]
fn SessionScope(client: BankClient, config: ApexConfig, children: Element) -> Element {
    use_context_provider(|| client.clone());
    use_context_provider(|| config.clone());
    let sessions = use_context_provider(make_session_store);
    use_context_provider(|| {
        let user = sessions.store().load_or_reset();
        if let Some(user) = &user {
            tracing::debug!("Restored session for {}", user.display_name());
        }
        Signal::new(SessionState { user })
    });

    rsx! {
        {children}
    }
}
