//! Sidebar component with page navigation

use dioxus::prelude::*;

use crate::state::AppState;
use crate::views::View;

/// Sidebar showing the app identity and page links
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let active = (state.active_view)();

    rsx! {
        aside {
            style: "
                width: 220px;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",

            div {
                style: "
                    font-size: 18px;
                    font-weight: 700;
                    color: {colors.primary};
                    margin-bottom: 16px;
                ",
                "FinVault"
            }

            for view in View::ALL {
                NavItem {
                    view,
                    is_active: view == active,
                }
            }
        }
    }
}

/// Navigation entry in the sidebar
#[component]
fn NavItem(view: View, is_active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let bg = if is_active {
        colors.primary
    } else {
        "transparent"
    };
    let text_color = if is_active { "#ffffff" } else { colors.text_primary };

    rsx! {
        div {
            style: "
                padding: 9px 12px;
                border-radius: 6px;
                cursor: pointer;
                background: {bg};
                color: {text_color};
                font-size: 14px;
                transition: background 0.15s;
            ",
            onclick: move |_| {
                state.active_view.set(view);
            },
            {view.label()}
        }
    }
}
