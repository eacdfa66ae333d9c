//! Overview - the dashboard landing page

use dioxus::prelude::*;

use crate::components::{Card, PageHeader};
use crate::data::{
    StatValue, EXPENSE_CATEGORIES, MONTHLY_FLOW, RECENT_TRANSACTIONS, STAT_CARDS, WEEKLY_SPENDING,
};
use crate::format::format_amount;
use crate::state::AppState;

/// Dashboard landing page: stat cards, cash-flow summary, recent activity
#[component]
pub fn Overview() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let display = (state.settings)().display;
    let display_name =
        finvault_core::profile::display_name(&(state.profile_form)().name).to_string();

    let stat_cards = STAT_CARDS.iter().map(|stat| {
        let change_color = if stat.up {
            colors.accent
        } else {
            colors.destructive
        };
        let value = match stat.value {
            StatValue::Amount(amount) => format_amount(&display, amount),
            StatValue::Text(text) => text.to_string(),
        };
        rsx! {
            Card {
                div {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "{stat.title}"
                }
                div {
                    style: "font-size: 24px; font-weight: 700; margin-top: 4px;",
                    "{value}"
                }
                div {
                    style: "color: {change_color}; font-size: 13px; margin-top: 6px;",
                    "{stat.change} from last month"
                }
            }
        }
    });

    let transactions = RECENT_TRANSACTIONS.iter().map(|tx| {
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
            div {
                style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid {colors.border};",
                div {
                    div { style: "font-size: 14px; font-weight: 500;", "{tx.name}" }
                    div {
                        style: "font-size: 12px; color: {colors.text_muted};",
                        "{tx.category} · {tx.date}"
                    }
                }
                span {
                    style: "color: {amount_color}; font-weight: 600; font-size: 14px;",
                    "{amount}"
                }
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Dashboard",
            subtitle: "Welcome back, {display_name}. Here's your financial overview.",
        }

        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
            {stat_cards}
        }

        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin-top: 16px;",

            Card {
                h3 { style: "margin: 0 0 12px;", "Income vs Expenses" }
                for flow in MONTHLY_FLOW {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid {colors.border}; font-size: 14px;",
                        span { style: "color: {colors.text_secondary}; width: 40px;", "{flow.month}" }
                        span { style: "color: {colors.primary};", {format_amount(&display, flow.income)} }
                        span { style: "color: {colors.destructive};", {format_amount(&display, flow.expenses)} }
                    }
                }
            }

            Card {
                h3 { style: "margin: 0 0 12px;", "Expense Breakdown" }
                for category in EXPENSE_CATEGORIES {
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span {
                                style: "width: 10px; height: 10px; border-radius: 50%; background: {category.color}; display: inline-block;",
                            }
                            span { style: "color: {colors.text_secondary};", "{category.name}" }
                        }
                        span { style: "font-weight: 500;", {format_amount(&display, category.value)} }
                    }
                }
            }
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",

            Card {
                h3 { style: "margin: 0 0 12px;", "Weekly Spending" }
                for day in WEEKLY_SPENDING {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 5px 0; font-size: 14px;",
                        span { style: "color: {colors.text_secondary};", "{day.day}" }
                        span { {format_amount(&display, day.amount)} }
                    }
                }
            }

            Card {
                h3 { style: "margin: 0 0 12px;", "Recent Transactions" }
                {transactions}
            }
        }
    }
}
