//! User-store context for the frontend. The provider builds the
//! localStorage-backed store from configuration, seeds the demo account once
//! on mount, and shares the store with routes and dialogs through Leptos
//! context.

use crate::app_lib::config::AppConfig;
use crate::features::auth::policy;
use crate::features::auth::store::{BrowserStorage, UserStore};
use leptos::prelude::*;

/// The store every route and dialog works against.
pub type AppUserStore = UserStore<BrowserStorage>;

/// Provides the user store and seeds the demo account once on mount.
#[component]
pub fn UserStoreProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();
    let store = AppUserStore::new(BrowserStorage, config.storage_key);

    if let Err(err) = policy::seed_demo_user(&store) {
        leptos::logging::error!("failed to seed the demo account: {err}");
    }

    provide_context(store);

    view! { {children()} }
}

/// Returns the shared user store or a fallback built from config.
pub fn use_user_store() -> AppUserStore {
    use_context::<AppUserStore>()
        .unwrap_or_else(|| AppUserStore::new(BrowserStorage, AppConfig::load().storage_key))
}
