//! Dashboard pages

mod insights;
mod investments;
mod overview;
mod settings;
mod tax_planner;
mod transactions;

pub use insights::Insights;
pub use investments::Investments;
pub use overview::Overview;
pub use settings::SettingsView;
pub use tax_planner::TaxPlanner;
pub use transactions::Transactions;

/// Pages reachable from the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Overview,
    Transactions,
    Investments,
    TaxPlanner,
    Insights,
    Settings,
}

impl View {
    /// All pages, in sidebar order
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Transactions,
        Self::Investments,
        Self::TaxPlanner,
        Self::Insights,
        Self::Settings,
    ];

    /// Sidebar label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Investments => "Investments",
            Self::TaxPlanner => "Tax Planner",
            Self::Insights => "Insights",
            Self::Settings => "Settings",
        }
    }
}
