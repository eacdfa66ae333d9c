use dioxus::prelude::*;

use super::row::SettingRow;
use crate::components::controls::{SaveButton, Toggle};
use crate::state::{AppState, ToastKind};

/// Notifications tab: alert and report toggles.
#[component]
pub fn NotificationsTab() -> Element {
    let mut state = use_context::<AppState>();
    let busy = (state.saving)().notifications;

    let form = (state.notifications_form)();

    let save = move |_: MouseEvent| {
        if (state.saving)().notifications {
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

        state.saving.write().notifications = true;

        let notifications = (state.notifications_form)();
        let mut settings_signal = state.settings;
        let mut saving_signal = state.saving;
        // App-scope task so the round trip finishes even if the tab unmounts
        spawn_forever(async move {
            match db.save_notifications(&notifications).await {
                Ok(()) => {
                    settings_signal.write().notifications = notifications;
                    state.show_toast(
                        ToastKind::Success,
                        "Notifications updated",
                        "Your notification preferences have been saved.",
                    );
                }
                Err(error) => {
                    tracing::error!("Failed to save notification settings: {}", error);
                    state.show_toast(
                        ToastKind::Error,
                        "Save failed",
                        "Your notification preferences could not be saved.",
                    );
                }
            }
            saving_signal.write().notifications = false;
        });
    };

    rsx! {
        SettingRow {
            label: "Budget Alerts",
            description: "Warn when a category nears its monthly budget",
            Toggle {
                checked: form.budget_alerts,
                disabled: busy,
                onchange: move |value: bool| {
                    state.notifications_form.write().budget_alerts = value;
                },
            }
        }

        SettingRow {
            label: "Transaction Notifications",
            description: "Notify on every recorded transaction",
            Toggle {
                checked: form.transaction_notifications,
                disabled: busy,
                onchange: move |value: bool| {
                    state.notifications_form.write().transaction_notifications = value;
                },
            }
        }

        SettingRow {
            label: "Weekly Reports",
            description: "Send a spending summary every week",
            Toggle {
                checked: form.weekly_reports,
                disabled: busy,
                onchange: move |value: bool| {
                    state.notifications_form.write().weekly_reports = value;
                },
            }
        }

        SettingRow {
            label: "Tax Reminders",
            description: "Remind about upcoming tax deadlines",
            Toggle {
                checked: form.tax_reminders,
                disabled: busy,
                onchange: move |value: bool| {
                    state.notifications_form.write().tax_reminders = value;
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
