//! Tax planner page

use dioxus::prelude::*;

use crate::components::{Card, PageHeader};
use crate::data::{DEDUCTIONS, REGIME_COMPARISON, TAX_SUGGESTIONS};
use crate::format::format_amount;
use crate::state::AppState;

/// Regime comparison, deduction usage and saving suggestions
#[component]
pub fn TaxPlanner() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let display = (state.settings)().display;

    let deduction_rows = DEDUCTIONS.iter().map(|deduction| {
        let fully_used = deduction.used >= deduction.limit;
        let used_color = if fully_used {
            colors.accent
        } else if deduction.used == 0 {
            colors.destructive
        } else {
            colors.text_primary
        };
        #[allow(clippy::cast_precision_loss)]
        let used_pct = (deduction.used as f64 / deduction.limit as f64 * 100.0).min(100.0);
        rsx! {
            div {
                style: "padding: 10px 0; border-bottom: 1px solid {colors.border};",
                div {
                    style: "display: flex; justify-content: space-between; font-size: 14px;",
                    div {
                        span { style: "font-weight: 600;", "{deduction.section}" }
                        span {
                            style: "color: {colors.text_muted}; margin-left: 8px; font-size: 13px;",
                            "{deduction.description}"
                        }
                    }
                    span {
                        style: "color: {used_color};",
                        {format!("{} / {}", format_amount(&display, deduction.used), format_amount(&display, deduction.limit))}
                    }
                }
                div {
                    style: "height: 6px; border-radius: 3px; background: {colors.bg_secondary}; margin-top: 6px; overflow: hidden;",
                    div {
                        style: "height: 100%; width: {used_pct}%; background: {colors.primary};",
                    }
                }
            }
        }
    });

    rsx! {
        PageHeader {
            title: "Tax Planner",
            subtitle: "Compare regimes and track your deductions.",
        }

        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",

            Card {
                h3 { style: "margin: 0 0 8px;", "Old vs New Regime" }
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            style: "text-align: left; font-size: 12px; color: {colors.text_muted}; text-transform: uppercase; border-bottom: 1px solid {colors.border};",
                            th { style: "padding-bottom: 8px; font-weight: 500;", "Income Slab" }
                            th { style: "padding-bottom: 8px; font-weight: 500;", "Old Regime" }
                            th { style: "padding-bottom: 8px; font-weight: 500; text-align: right;", "New Regime" }
                        }
                    }
                    tbody {
                        for slab in REGIME_COMPARISON {
                            tr {
                                td { style: "padding: 8px 0; font-size: 14px;", "{slab.slab}" }
                                td {
                                    style: "padding: 8px 0; font-size: 14px;",
                                    {format_amount(&display, slab.old_regime)}
                                }
                                td {
                                    style: "padding: 8px 0; font-size: 14px; text-align: right;",
                                    {format_amount(&display, slab.new_regime)}
                                }
                            }
                        }
                    }
                }
            }

            Card {
                h3 { style: "margin: 0 0 8px;", "Deductions" }
                {deduction_rows}
            }
        }

        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 16px;",
            for suggestion in TAX_SUGGESTIONS {
                Card {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: baseline;",
                        h4 { style: "margin: 0; font-size: 15px;", "{suggestion.title}" }
                        span {
                            style: "color: {colors.accent}; font-weight: 700; font-size: 14px;",
                            "{suggestion.savings}"
                        }
                    }
                    p {
                        style: "margin: 8px 0 0; font-size: 13px; color: {colors.text_muted};",
                        "{suggestion.description}"
                    }
                }
            }
        }
    }
}
