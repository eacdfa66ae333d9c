use dioxus::prelude::*;

use super::row::SettingRow;
use crate::components::controls::{SaveButton, SelectField, Toggle};
use crate::state::{AppState, ToastKind};

const CURRENCY_OPTIONS: &[(&str, &str)] = &[
    ("INR", "Indian Rupee (₹)"),
    ("USD", "US Dollar ($)"),
    ("EUR", "Euro (€)"),
];

/// Display tab: currency and number formatting.
#[component]
pub fn DisplayTab() -> Element {
    let mut state = use_context::<AppState>();
    let busy = (state.saving)().display;

    let form = (state.display_form)();

    let save = move |_: MouseEvent| {
        if (state.saving)().display {
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

        state.saving.write().display = true;

        let display = (state.display_form)();
        let mut settings_signal = state.settings;
        let mut saving_signal = state.saving;
        // App-scope task so the round trip finishes even if the tab unmounts
        spawn_forever(async move {
            match db.save_display(&display).await {
                Ok(()) => {
                    settings_signal.write().display = display;
                    state.show_toast(
                        ToastKind::Success,
                        "Display updated",
                        "Your display preferences have been saved.",
                    );
                }
                Err(error) => {
                    tracing::error!("Failed to save display settings: {}", error);
                    state.show_toast(
                        ToastKind::Error,
                        "Save failed",
                        "Your display preferences could not be saved.",
                    );
                }
            }
            saving_signal.write().display = false;
        });
    };

    rsx! {
        SettingRow {
            label: "Currency",
            description: "Currency used for amounts across the dashboard",
            SelectField {
                value: form.currency.clone(),
                options: CURRENCY_OPTIONS,
                disabled: busy,
                onchange: move |value: String| {
                    state.display_form.write().currency = value;
                },
            }
        }

        SettingRow {
            label: "Compact Numbers",
            description: "Abbreviate large amounts (e.g. ₹1.1L)",
            Toggle {
                checked: form.compact_numbers,
                disabled: busy,
                onchange: move |value: bool| {
                    state.display_form.write().compact_numbers = value;
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
