use dioxus::prelude::*;

use finvault_core::profile::complete_profile;

use super::row::SettingRow;
use crate::components::controls::{SaveButton, TextField};
use crate::state::{AppState, ProfileForm, ToastKind};

/// Profile tab: name, email, username and bio with a store round trip on save.
#[component]
pub fn ProfileTab() -> Element {
    let mut state = use_context::<AppState>();
    let busy = (state.saving)().profile;

    let form = (state.profile_form)();

    let save = move |_: MouseEvent| {
        if (state.saving)().profile {
            return;
        }

        let draft = (state.profile_form)();
        let Some(db) = state.db_service.read().clone() else {
            state.show_toast(
                ToastKind::Error,
                "Save failed",
                "The local store is not available.",
            );
            return;
        };

        state.saving.write().profile = true;

        // Derivation fills blank username/bio; typed values pass through as-is
        let profile = complete_profile(draft.to_profile());
        let cache = (state.profile_cache)();
        let mut profile_form_signal = state.profile_form;
        let mut saving_signal = state.saving;
        // App-scope task so the round trip finishes even if the tab unmounts
        spawn_forever(async move {
            match db.save_profile(&profile).await {
                Ok(saved) => {
                    if let Err(error) = cache.save(&saved) {
                        tracing::warn!("Failed to refresh profile cache: {}", error);
                    }
                    profile_form_signal.set(ProfileForm::from_profile(&saved));
                    state.show_toast(
                        ToastKind::Success,
                        "Profile updated",
                        "Your profile changes have been saved.",
                    );
                }
                Err(error) => {
                    tracing::error!("Failed to save profile: {}", error);
                    state.show_toast(
                        ToastKind::Error,
                        "Save failed",
                        "Your profile could not be saved. Your edits are unchanged.",
                    );
                }
            }
            saving_signal.write().profile = false;
        });
    };

    rsx! {
        SettingRow {
            label: "Full Name",
            description: "Shown across the dashboard",
            TextField {
                value: form.name.clone(),
                placeholder: "Your name",
                disabled: busy,
                oninput: move |value: String| {
                    state.profile_form.write().name = value;
                },
            }
        }

        SettingRow {
            label: "Email",
            description: "Used for sign-in and notifications",
            TextField {
                value: form.email.clone(),
                placeholder: "you@example.com",
                disabled: busy,
                oninput: move |value: String| {
                    state.profile_form.write().email = value;
                },
            }
        }

        SettingRow {
            label: "Username",
            description: "Leave blank to derive one from your name",
            TextField {
                value: form.username.clone(),
                placeholder: "username",
                disabled: busy,
                oninput: move |value: String| {
                    state.profile_form.write().username = value;
                },
            }
        }

        SettingRow {
            label: "Bio",
            description: "A short line about you",
            TextField {
                value: form.bio.clone(),
                multiline: true,
                disabled: busy,
                oninput: move |value: String| {
                    state.profile_form.write().bio = value;
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
