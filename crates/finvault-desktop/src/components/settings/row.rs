use dioxus::prelude::*;

use crate::state::AppState;

/// Shared row layout for settings sections.
#[component]
pub fn SettingRow(
    #[props(into)] label: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 24px;
                padding: 14px 0;
                border-bottom: 1px solid {colors.border};
            ",

            div {
                style: "flex: 1; min-width: 0;",
                div {
                    style: "font-size: 14px; font-weight: 500;",
                    "{label}"
                }
                div {
                    style: "font-size: 13px; color: {colors.text_muted}; margin-top: 2px;",
                    "{description}"
                }
            }
            div {
                style: "flex-shrink: 0;",
                {children}
            }
        }
    }
}
