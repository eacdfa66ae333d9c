//! Card and page header building blocks

use dioxus::prelude::*;

use crate::state::AppState;

/// Bordered surface used by every dashboard panel
#[component]
pub fn Card(children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                background: {colors.bg_card};
                border: 1px solid {colors.border};
                border-radius: 10px;
                padding: 16px;
            ",
            {children}
        }
    }
}

/// Page title block shown at the top of each view
#[component]
pub fn PageHeader(#[props(into)] title: String, #[props(into)] subtitle: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            h1 {
                style: "margin: 0; font-size: 24px; font-weight: 700;",
                "{title}"
            }
            p {
                style: "margin: 4px 0 0; color: {colors.text_muted}; font-size: 14px;",
                "{subtitle}"
            }
        }
    }
}
