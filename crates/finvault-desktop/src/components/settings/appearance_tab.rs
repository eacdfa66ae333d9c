use dioxus::prelude::*;

use finvault_core::models::ThemeMode;

use super::row::SettingRow;
use crate::components::controls::{SaveButton, SelectField};
use crate::state::{AppState, ToastKind};

const THEME_OPTIONS: &[(&str, &str)] = &[
    ("system", "System"),
    ("light", "Light"),
    ("dark", "Dark"),
];

/// Appearance tab: theme preference.
#[component]
pub fn AppearanceTab() -> Element {
    let mut state = use_context::<AppState>();
    let busy = (state.saving)().appearance;

    let mode = (state.appearance_form)();
    let current_value = match mode {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System => "system",
    };

    let save = move |_: MouseEvent| {
        if (state.saving)().appearance {
            return;
        }
        let Some(db) = state.db_service.read().clone() else {
            state.show_toast(
                ToastKind::Error,
                "Save failed",
                "The local store is not available.",
            );
            return;
        };

        state.saving.write().appearance = true;

        let mode = (state.appearance_form)();
        let mut settings_signal = state.settings;
        let mut saving_signal = state.saving;
        // App-scope task so the round trip finishes even if the tab unmounts
        spawn_forever(async move {
            match db.save_theme(mode).await {
                Ok(()) => {
                    settings_signal.write().theme = mode;
                    state.refresh_theme();
                    state.show_toast(
                        ToastKind::Success,
                        "Appearance updated",
                        "Your theme preference has been saved.",
                    );
                }
                Err(error) => {
                    tracing::error!("Failed to save theme: {}", error);
                    state.show_toast(
                        ToastKind::Error,
                        "Save failed",
                        "Your theme preference could not be saved.",
                    );
                }
            }
            saving_signal.write().appearance = false;
        });
    };

    rsx! {
        SettingRow {
            label: "Theme",
            description: "Light, dark, or follow the system preference",
            SelectField {
                value: current_value,
                options: THEME_OPTIONS,
                disabled: busy,
                onchange: move |value: String| {
                    let mode = match value.as_str() {
                        "light" => ThemeMode::Light,
                        "dark" => ThemeMode::Dark,
                        _ => ThemeMode::System,
                    };
                    state.appearance_form.set(mode);
                },
            }
        }

        div {
            style: "margin-top: 16px;",
            SaveButton {
                label: "Save Changes",
                busy: busy,
                onclick: save,
            }
        }
    }
}
