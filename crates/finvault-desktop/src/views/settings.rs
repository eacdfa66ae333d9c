//! Settings page with per-tab editing

use dioxus::prelude::*;

use crate::components::{
    AccountTab, AppearanceTab, Card, DisplayTab, NotificationsTab, PageHeader, ProfileTab,
};
use crate::state::AppState;

/// Settings tab identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Profile,
    Account,
    Appearance,
    Notifications,
    Display,
}

impl SettingsTab {
    const ALL: [Self; 5] = [
        Self::Profile,
        Self::Account,
        Self::Appearance,
        Self::Notifications,
        Self::Display,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Appearance => "Appearance",
            Self::Notifications => "Notifications",
            Self::Display => "Display",
        }
    }
}

/// Settings page: five independently saved tabs
#[component]
pub fn SettingsView() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut active_tab = use_signal(SettingsTab::default);

    let current = active_tab();

    let tab_bar = SettingsTab::ALL.into_iter().map(|tab| {
        let is_active = tab == current;
        let border = if is_active {
            colors.primary
        } else {
            "transparent"
        };
        let text_color = if is_active {
            colors.text_primary
        } else {
            colors.text_muted
        };
        rsx! {
            div {
                style: "
                    padding: 10px 4px;
                    margin-right: 20px;
                    cursor: pointer;
                    font-size: 14px;
                    color: {text_color};
                    border-bottom: 2px solid {border};
                ",
                onclick: move |_| active_tab.set(tab),
                {tab.label()}
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Settings",
            subtitle: "Manage your profile and application preferences.",
        }

        div {
            style: "display: flex; border-bottom: 1px solid {colors.border}; margin-bottom: 16px;",
            {tab_bar}
        }

        Card {
            match current {
                SettingsTab::Profile => rsx! { ProfileTab {} },
                SettingsTab::Account => rsx! { AccountTab {} },
                SettingsTab::Appearance => rsx! { AppearanceTab {} },
                SettingsTab::Notifications => rsx! { NotificationsTab {} },
                SettingsTab::Display => rsx! { DisplayTab {} },
            }
        }
    }
}
