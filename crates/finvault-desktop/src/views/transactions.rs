//! Transactions page

use dioxus::prelude::*;

use crate::components::{Card, PageHeader};
use crate::data::{EXPENSE_CATEGORIES, RECENT_TRANSACTIONS, WEEKLY_SPENDING};
use crate::format::format_amount;
use crate::state::AppState;

/// Transaction ledger with category and weekly breakdowns
#[component]
pub fn Transactions() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let display = (state.settings)().display;

    let total_in: i64 = RECENT_TRANSACTIONS
        .iter()
        .filter(|tx| tx.is_income())
        .map(|tx| tx.amount)
        .sum();
    let total_out: i64 = RECENT_TRANSACTIONS
        .iter()
        .filter(|tx| !tx.is_income())
        .map(|tx| tx.amount.abs())
        .sum();

    let rows = RECENT_TRANSACTIONS.iter().map(|tx| {
        let amount_color = if tx.is_income() {
            colors.accent
        } else {
            colors.destructive
        };
        let amount = if tx.is_income() {
            format!("+{}", format_amount(&display, tx.amount))
        } else {
            format_amount(&display, tx.amount)
        };
        rsx! {
            tr {
                td { style: "padding: 10px 0; font-size: 14px;", "{tx.name}" }
                td {
                    style: "padding: 10px 0; font-size: 13px; color: {colors.text_muted};",
                    "{tx.category}"
                }
                td {
                    style: "padding: 10px 0; font-size: 13px; color: {colors.text_muted};",
                    "{tx.date}"
                }
                td {
                    style: "padding: 10px 0; font-size: 14px; font-weight: 600; text-align: right; color: {amount_color};",
                    "{amount}"
                }
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Transactions",
            subtitle: "All income and expenses for this month.",
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",

            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Money In"
                }
                div {
                    style: "font-size: 22px; font-weight: 700; color: {colors.accent}; margin-top: 4px;",
                    {format_amount(&display, total_in)}
                }
            }
            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Money Out"
                }
                div {
                    style: "font-size: 22px; font-weight: 700; color: {colors.destructive}; margin-top: 4px;",
                    {format_amount(&display, total_out)}
                }
            }
        }

        Card {
            h3 { style: "margin: 0 0 8px;", "Ledger" }
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        style: "text-align: left; font-size: 12px; color: {colors.text_muted}; text-transform: uppercase; border-bottom: 1px solid {colors.border};",
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Description" }
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Category" }
                        th { style: "padding-bottom: 8px; font-weight: 500;", "Date" }
                        th { style: "padding-bottom: 8px; font-weight: 500; text-align: right;", "Amount" }
                    }
                }
                tbody { {rows} }
            }
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",

            Card {
                h3 { style: "margin: 0 0 12px;", "By Category" }
                for category in EXPENSE_CATEGORIES {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span {
                                style: "width: 10px; height: 10px; border-radius: 50%; background: {category.color}; display: inline-block;",
                            }
                            span { style: "color: {colors.text_secondary};", "{category.name}" }
                        }
                        span { {format_amount(&display, category.value)} }
                    }
                }
            }

            Card {
                h3 { style: "margin: 0 0 12px;", "This Week" }
                for day in WEEKLY_SPENDING {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        span { style: "color: {colors.text_secondary};", "{day.day}" }
                        span { {format_amount(&display, day.amount)} }
                    }
                }
            }
        }
    }
}
