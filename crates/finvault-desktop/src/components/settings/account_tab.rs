use dioxus::prelude::*;

use super::row::SettingRow;
use crate::components::controls::{SaveButton, Toggle};
use crate::state::{AppState, ToastKind};

/// Account tab: security toggles.
#[component]
pub fn AccountTab() -> Element {
    let mut state = use_context::<AppState>();
    let busy = (state.saving)().account;

    let form = (state.account_form)();

    let save = move |_: MouseEvent| {
        if (state.saving)().account {
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

        state.saving.write().account = true;

        let account = (state.account_form)();
        let mut settings_signal = state.settings;
        let mut saving_signal = state.saving;
        // App-scope task so the round trip finishes even if the tab unmounts
        spawn_forever(async move {
            match db.save_account(&account).await {
                Ok(()) => {
                    settings_signal.write().account = account;
                    state.show_toast(
                        ToastKind::Success,
                        "Account updated",
                        "Your security preferences have been saved.",
                    );
                }
                Err(error) => {
                    tracing::error!("Failed to save account settings: {}", error);
                    state.show_toast(
                        ToastKind::Error,
                        "Save failed",
                        "Your account settings could not be saved.",
                    );
                }
            }
            saving_signal.write().account = false;
        });
    };

    rsx! {
        SettingRow {
            label: "Two-Factor Authentication",
            description: "Require a second factor when signing in",
            Toggle {
                checked: form.two_factor_enabled,
                disabled: busy,
                onchange: move |value: bool| {
                    state.account_form.write().two_factor_enabled = value;
                },
            }
        }

        SettingRow {
            label: "Biometric Login",
            description: "Unlock with fingerprint or face recognition",
            Toggle {
                checked: form.biometric_login_enabled,
                disabled: busy,
                onchange: move |value: bool| {
                    state.account_form.write().biometric_login_enabled = value;
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
