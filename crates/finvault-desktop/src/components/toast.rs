//! Transient notification overlay

use dioxus::prelude::*;

use crate::state::{AppState, ToastKind};

/// Renders the visible toasts, stacked in the bottom-right corner
#[component]
pub fn ToastHost() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let toasts = (state.toasts)();
    if toasts.is_empty() {
        return rsx! {};
    }

    let cards = toasts.iter().map(|toast| {
        let accent = match toast.kind {
            ToastKind::Success => colors.accent,
            ToastKind::Error => colors.destructive,
        };
        rsx! {
            div {
                key: "{toast.serial}",
                style: "
                    min-width: 260px;
                    max-width: 360px;
                    background: {colors.bg_card};
                    border: 1px solid {colors.border};
                    border-left: 4px solid {accent};
                    border-radius: 8px;
                    padding: 12px 16px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
                ",
                div {
                    style: "font-weight: 600; font-size: 14px; color: {colors.text_primary};",
                    "{toast.title}"
                }
                div {
                    style: "font-size: 13px; color: {colors.text_muted}; margin-top: 2px;",
                    "{toast.description}"
                }
            }
        }
    });

    rsx! {
        div {
            style: "
                position: fixed;
                bottom: 20px;
                right: 20px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 1000;
            ",
            {cards}
        }
    }
}
