//! Main application component

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use finvault_core::models::{Settings, ThemeMode, UserProfile};
use finvault_core::profile::complete_profile;

use crate::components::{Sidebar, ToastHost};
use crate::services::{DatabaseService, ProfileCache};
use crate::state::{AppState, ProfileForm, SaveFlags};
use crate::theme::{detect_system_dark_mode, resolve_theme};
use crate::views::{Insights, Investments, Overview, SettingsView, TaxPlanner, Transactions, View};

/// How often the ambient dark-mode preference is re-checked
const SYSTEM_THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Root application component
#[component]
pub fn App() -> Element {
    let active_view = use_signal(View::default);
    let settings = use_signal(Settings::default);
    let system_dark = use_signal(detect_system_dark_mode);
    let theme = use_signal(|| resolve_theme(ThemeMode::System, detect_system_dark_mode()));
    let profile_form = use_signal(ProfileForm::default);
    let account_form = use_signal(Default::default);
    let appearance_form = use_signal(ThemeMode::default);
    let notifications_form = use_signal(Default::default);
    let display_form = use_signal(Default::default);
    let saving = use_signal(SaveFlags::default);
    let db_service: Signal<Option<Arc<DatabaseService>>> = use_signal(|| None);
    let profile_cache = use_signal(|| Arc::new(ProfileCache::default()));
    let toasts = use_signal(Vec::new);
    let toast_serial = use_signal(|| 0);
    let mut db_initialized = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        active_view,
        settings,
        system_dark,
        theme,
        profile_form,
        account_form,
        appearance_form,
        notifications_form,
        display_form,
        saving,
        db_service,
        profile_cache,
        toasts,
        toast_serial,
    });

    // Initialize the store asynchronously (only once)
    use_effect(move || {
        if db_initialized() {
            return;
        }
        db_initialized.set(true); // Mark immediately to prevent double init

        let mut state = state;
        spawn(async move {
            let cached = (state.profile_cache)().load();

            match DatabaseService::new().await {
                Ok(db) => {
                    let db = Arc::new(db);
                    let loaded_settings = db.load_settings().await.unwrap_or_default();

                    // The store wins over the local cache when both exist
                    let stored = match db.load_profile().await {
                        Ok(stored) => stored,
                        Err(error) => {
                            tracing::error!("Failed to load profile: {}", error);
                            None
                        }
                    };
                    let profile = complete_profile(stored.or(cached).unwrap_or_else(empty_profile));
                    if let Err(error) = (state.profile_cache)().save(&profile) {
                        tracing::warn!("Failed to refresh profile cache: {}", error);
                    }

                    state.appearance_form.set(loaded_settings.theme);
                    state.account_form.set(loaded_settings.account);
                    state.notifications_form.set(loaded_settings.notifications);
                    state.display_form.set(loaded_settings.display.clone());
                    state.settings.set(loaded_settings);
                    state.profile_form.set(ProfileForm::from_profile(&profile));
                    state.db_service.set(Some(db));
                    state.refresh_theme();
                }
                Err(error) => {
                    tracing::error!("Failed to initialize database: {}", error);
                    // Stay usable read-only from the cache; saves will surface errors
                    let profile = complete_profile(cached.unwrap_or_else(empty_profile));
                    state.profile_form.set(ProfileForm::from_profile(&profile));
                }
            }
        });
    });

    // Track the ambient dark-mode preference while theme is set to System
    use_future(move || async move {
        let mut system_dark_signal = state.system_dark;
        loop {
            tokio::time::sleep(SYSTEM_THEME_POLL_INTERVAL).await;

            let dark = detect_system_dark_mode();
            if *system_dark_signal.peek() != dark {
                system_dark_signal.set(dark);
                state.refresh_theme();
            }
        }
    });

    let colors = theme().palette();

    rsx! {
        div {
            style: "
                display: flex;
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            Sidebar {}

            main {
                style: "flex: 1; padding: 24px; overflow-y: auto;",
                match (state.active_view)() {
                    View::Overview => rsx! { Overview {} },
                    View::Transactions => rsx! { Transactions {} },
                    View::Investments => rsx! { Investments {} },
                    View::TaxPlanner => rsx! { TaxPlanner {} },
                    View::Insights => rsx! { Insights {} },
                    View::Settings => rsx! { SettingsView {} },
                }
            }

            ToastHost {}
        }
    }
}

const fn empty_profile() -> UserProfile {
    UserProfile {
        name: String::new(),
        email: String::new(),
        username: None,
        bio: None,
    }
}
