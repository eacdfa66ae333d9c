//! Investments page

use dioxus::prelude::*;

use crate::components::{Card, PageHeader};
use crate::data::{ALLOCATION, HOLDINGS, PORTFOLIO_HISTORY};
use crate::format::{format_amount, format_percent};
use crate::state::AppState;

/// Portfolio holdings, allocation and history
#[component]
pub fn Investments() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let display = (state.settings)().display;

    let total_invested: i64 = HOLDINGS.iter().map(|h| h.invested).sum();
    let total_current: i64 = HOLDINGS.iter().map(|h| h.current).sum();
    #[allow(clippy::cast_precision_loss)]
    let overall_change =
        (total_current - total_invested) as f64 / total_invested as f64 * 100.0;
    let overall_color = if total_current >= total_invested {
        colors.accent
    } else {
        colors.destructive
    };

    let holding_rows = HOLDINGS.iter().map(|holding| {
        let change_color = if holding.change >= 0.0 {
            colors.accent
        } else {
            colors.destructive
        };
        rsx! {
            tr {
                td { style: "padding: 10px 0; font-size: 14px;", "{holding.name}" }
                td {
                    style: "padding: 10px 0; font-size: 13px; color: {colors.text_muted};",
                    "{holding.kind}"
                }
                td {
                    style: "padding: 10px 0; font-size: 14px;",
                    {format_amount(&display, holding.invested)}
                }
                td {
                    style: "padding: 10px 0; font-size: 14px;",
                    {format_amount(&display, holding.current)}
                }
                td {
                    style: "padding: 10px 0; font-size: 14px; font-weight: 600; text-align: right; color: {change_color};",
                    {format_percent(holding.change)}
                }
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Investments",
            subtitle: "Your portfolio across stocks, funds and crypto.",
        }

        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 16px;",

            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Invested"
                }
                div {
                    style: "font-size: 22px; font-weight: 700; margin-top: 4px;",
                    {format_amount(&display, total_invested)}
                }
            }
            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Current Value"
                }
                div {
                    style: "font-size: 22px; font-weight: 700; margin-top: 4px;",
                    {format_amount(&display, total_current)}
                }
            }
            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Overall Return"
                }
                div {
                    style: "font-size: 22px; font-weight: 700; margin-top: 4px; color: {overall_color};",
                    {format_percent(overall_change)}
                }
            }
        }

        Card {
            h3 { style: "margin: 0 0 8px;", "Holdings" }
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        style: "text-align: left; font-size: 12px; color: {colors.text_muted}; text-transform: uppercase; border-bottom: 1px solid {colors.border};",
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Name" }
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Type" }
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Invested" }
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Current" }
                        th { style: "padding-bottom: 8px; font-weight: 500; text-align: right;", "Change" }
                    }
                }
                tbody { {holding_rows} }
            }
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",

            Card {
                h3 { style: "margin: 0 0 12px;", "Allocation" }
                for slice in ALLOCATION {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span {
                                style: "width: 10px; height: 10px; border-radius: 50%; background: {slice.color}; display: inline-block;",
                            }
                            span { style: "color: {colors.text_secondary};", "{slice.name}" }
                        }
                        span { {format_amount(&display, slice.value)} }
                    }
                }
            }

            Card {
                h3 { style: "margin: 0 0 12px;", "Portfolio History" }
                for point in PORTFOLIO_HISTORY {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        span { style: "color: {colors.text_secondary};", "{point.month}" }
                        span { {format_amount(&display, point.value)} }
                    }
                }
            }
        }
    }
}
