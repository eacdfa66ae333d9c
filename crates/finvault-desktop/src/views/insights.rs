//! Insights page

use dioxus::prelude::*;

use crate::components::{Card, PageHeader};
use crate::data::{InsightKind, INSIGHTS, PATTERNS};
use crate::state::AppState;

/// Spending insights and pattern summary
#[component]
pub fn Insights() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let cards = INSIGHTS.iter().map(|insight| {
        let (badge, badge_color) = match insight.kind {
            InsightKind::Alert => ("Alert", colors.warning),
            InsightKind::Tip => ("Tip", colors.accent),
        };
        rsx! {
            Card {
                div {
                    style: "display: flex; justify-content: space-between; align-items: baseline;",
                    h4 { style: "margin: 0; font-size: 15px;", "{insight.title}" }
                    span {
                        style: "
                            color: {badge_color};
                            border: 1px solid {badge_color};
                            border-radius: 10px;
                            padding: 1px 8px;
                            font-size: 11px;
                            text-transform: uppercase;
                        ",
                        "{badge}"
                    }
                }
                p {
                    style: "margin: 8px 0 0; font-size: 13px; color: {colors.text_muted};",
                    "{insight.description}"
                }
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Insights",
            subtitle: "What your spending says this month.",
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            {cards}
        }

        div {
            style: "margin-top: 16px;",
            Card {
                h3 { style: "margin: 0 0 12px;", "Spending Patterns" }
                for pattern in PATTERNS {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 6px 0; font-size: 14px; border-bottom: 1px solid {colors.border};",
                        span { style: "color: {colors.text_secondary};", "{pattern.category}" }
                        span { style: "font-weight: 500;", "{pattern.value}" }
                    }
                }
            }
        }
    }
}
