//! Static mock datasets backing the dashboard views
//!
//! All analytics in the dashboard render from these fixed arrays; nothing
//! here is computed from the user store.

/// Month of income vs expenses
pub struct MonthlyFlow {
    pub month: &'static str,
    pub income: i64,
    pub expenses: i64,
}

pub const MONTHLY_FLOW: &[MonthlyFlow] = &[
    MonthlyFlow { month: "Jul", income: 85_000, expenses: 52_000 },
    MonthlyFlow { month: "Aug", income: 92_000, expenses: 58_000 },
    MonthlyFlow { month: "Sep", income: 88_000, expenses: 49_000 },
    MonthlyFlow { month: "Oct", income: 95_000, expenses: 61_000 },
    MonthlyFlow { month: "Nov", income: 102_000, expenses: 55_000 },
    MonthlyFlow { month: "Dec", income: 110_000, expenses: 68_000 },
    MonthlyFlow { month: "Jan", income: 98_000, expenses: 54_000 },
];

/// Expense category slice
pub struct ExpenseCategory {
    pub name: &'static str,
    pub value: i64,
    pub color: &'static str,
}

pub const EXPENSE_CATEGORIES: &[ExpenseCategory] = &[
    ExpenseCategory { name: "Housing", value: 25_000, color: "#0ea5e9" },
    ExpenseCategory { name: "Food", value: 12_000, color: "#2dd4a7" },
    ExpenseCategory { name: "Transport", value: 8_000, color: "#8b5cf6" },
    ExpenseCategory { name: "Shopping", value: 6_000, color: "#f59e0b" },
    ExpenseCategory { name: "Others", value: 3_000, color: "#ef4444" },
];

/// Day of spending
pub struct DailySpend {
    pub day: &'static str,
    pub amount: i64,
}

pub const WEEKLY_SPENDING: &[DailySpend] = &[
    DailySpend { day: "Mon", amount: 2_200 },
    DailySpend { day: "Tue", amount: 1_800 },
    DailySpend { day: "Wed", amount: 3_100 },
    DailySpend { day: "Thu", amount: 1_500 },
    DailySpend { day: "Fri", amount: 4_200 },
    DailySpend { day: "Sat", amount: 3_800 },
    DailySpend { day: "Sun", amount: 2_400 },
];

/// A single ledger entry; negative amounts are expenses
pub struct Transaction {
    pub name: &'static str,
    pub amount: i64,
    pub category: &'static str,
    pub date: &'static str,
}

impl Transaction {
    #[must_use]
    pub const fn is_income(&self) -> bool {
        self.amount >= 0
    }
}

pub const RECENT_TRANSACTIONS: &[Transaction] = &[
    Transaction { name: "Salary Credit", amount: 98_000, category: "Salary", date: "Feb 1" },
    Transaction { name: "Rent Payment", amount: -25_000, category: "Housing", date: "Feb 2" },
    Transaction { name: "Grocery Store", amount: -3_200, category: "Food", date: "Feb 5" },
    Transaction { name: "Freelance Project", amount: 15_000, category: "Freelance", date: "Feb 7" },
    Transaction { name: "Electricity Bill", amount: -2_800, category: "Utilities", date: "Feb 8" },
];

/// Headline stat card
pub struct StatCard {
    pub title: &'static str,
    pub value: StatValue,
    pub change: &'static str,
    pub up: bool,
}

/// Stat headline: a monetary amount (rendered per display preferences) or plain text
pub enum StatValue {
    Amount(i64),
    Text(&'static str),
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard { title: "Total Balance", value: StatValue::Amount(482_350), change: "+12.5%", up: true },
    StatCard { title: "Monthly Income", value: StatValue::Amount(113_000), change: "+8.2%", up: true },
    StatCard { title: "Monthly Expenses", value: StatValue::Amount(54_000), change: "-3.1%", up: false },
    StatCard { title: "Savings Rate", value: StatValue::Text("52.2%"), change: "+5.4%", up: true },
];

/// Investment holding
pub struct Holding {
    pub name: &'static str,
    pub kind: &'static str,
    pub invested: i64,
    pub current: i64,
    pub change: f64,
}

pub const HOLDINGS: &[Holding] = &[
    Holding { name: "HDFC Bank", kind: "Stock", invested: 150_000, current: 185_000, change: 23.3 },
    Holding { name: "Nifty 50 Index Fund", kind: "Mutual Fund", invested: 200_000, current: 238_000, change: 19.0 },
    Holding { name: "Bitcoin", kind: "Crypto", invested: 50_000, current: 42_000, change: -16.0 },
    Holding { name: "Reliance Industries", kind: "Stock", invested: 120_000, current: 142_000, change: 18.3 },
    Holding { name: "SBI Bluechip Fund", kind: "Mutual Fund", invested: 100_000, current: 118_000, change: 18.0 },
    Holding { name: "Ethereum", kind: "Crypto", invested: 30_000, current: 35_000, change: 16.7 },
    Holding { name: "Infosys", kind: "Stock", invested: 80_000, current: 72_000, change: -10.0 },
];

/// Portfolio allocation slice
pub struct Allocation {
    pub name: &'static str,
    pub value: i64,
    pub color: &'static str,
}

pub const ALLOCATION: &[Allocation] = &[
    Allocation { name: "Stocks", value: 399_000, color: "#0ea5e9" },
    Allocation { name: "Mutual Funds", value: 356_000, color: "#2dd4a7" },
    Allocation { name: "Crypto", value: 77_000, color: "#8b5cf6" },
];

/// Month of portfolio value
pub struct PortfolioPoint {
    pub month: &'static str,
    pub value: i64,
}

pub const PORTFOLIO_HISTORY: &[PortfolioPoint] = &[
    PortfolioPoint { month: "Sep", value: 680_000 },
    PortfolioPoint { month: "Oct", value: 710_000 },
    PortfolioPoint { month: "Nov", value: 695_000 },
    PortfolioPoint { month: "Dec", value: 750_000 },
    PortfolioPoint { month: "Jan", value: 790_000 },
    PortfolioPoint { month: "Feb", value: 832_000 },
];

/// Tax owed per income slab under the two regimes
pub struct RegimeSlab {
    pub slab: &'static str,
    pub old_regime: i64,
    pub new_regime: i64,
}

pub const REGIME_COMPARISON: &[RegimeSlab] = &[
    RegimeSlab { slab: "0-3L", old_regime: 0, new_regime: 0 },
    RegimeSlab { slab: "3-6L", old_regime: 25_000, new_regime: 15_000 },
    RegimeSlab { slab: "6-9L", old_regime: 65_000, new_regime: 30_000 },
    RegimeSlab { slab: "9-12L", old_regime: 115_000, new_regime: 60_000 },
    RegimeSlab { slab: "12-15L", old_regime: 175_000, new_regime: 100_000 },
];

/// Deduction section usage
pub struct Deduction {
    pub section: &'static str,
    pub description: &'static str,
    pub limit: i64,
    pub used: i64,
}

pub const DEDUCTIONS: &[Deduction] = &[
    Deduction { section: "80C", description: "PPF, ELSS, LIC, EPF", limit: 150_000, used: 135_000 },
    Deduction { section: "80D", description: "Health Insurance Premium", limit: 50_000, used: 32_000 },
    Deduction { section: "HRA", description: "House Rent Allowance", limit: 180_000, used: 180_000 },
    Deduction { section: "80CCD(1B)", description: "NPS Additional", limit: 50_000, used: 50_000 },
    Deduction { section: "24(b)", description: "Home Loan Interest", limit: 200_000, used: 0 },
];

/// Tax-saving suggestion card
pub struct TaxSuggestion {
    pub title: &'static str,
    pub savings: &'static str,
    pub description: &'static str,
}

pub const TAX_SUGGESTIONS: &[TaxSuggestion] = &[
    TaxSuggestion {
        title: "Invest in ELSS Funds",
        savings: "₹46,800",
        description: "You can save up to ₹46,800 in taxes by investing ₹1.5L in ELSS mutual funds under Section 80C.",
    },
    TaxSuggestion {
        title: "NPS Contribution",
        savings: "₹15,600",
        description: "Additional ₹50,000 deduction under 80CCD(1B) by investing in National Pension System.",
    },
    TaxSuggestion {
        title: "Health Insurance",
        savings: "₹5,616",
        description: "Get ₹18,000 more deduction under 80D by getting comprehensive health cover for parents.",
    },
];

/// Insight card severity
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Alert,
    Tip,
}

/// AI-style insight card
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const INSIGHTS: &[Insight] = &[
    Insight {
        kind: InsightKind::Alert,
        title: "Overspending on Food",
        description: "Your food expenses are 32% higher than last month. Consider meal planning to reduce costs.",
    },
    Insight {
        kind: InsightKind::Tip,
        title: "Investment Opportunity",
        description: "Your savings rate is 52%. Consider allocating an extra ₹10,000/month to SIP for higher returns.",
    },
    Insight {
        kind: InsightKind::Tip,
        title: "Subscription Audit",
        description: "You have 5 active subscriptions totaling ₹3,200/month. 2 haven't been used in 30 days.",
    },
    Insight {
        kind: InsightKind::Alert,
        title: "Budget Optimization",
        description: "Redirecting ₹5,000 from shopping to your Emergency Fund goal would help you reach it 3 months sooner.",
    },
];

/// Spending pattern summary row
pub struct Pattern {
    pub category: &'static str,
    pub value: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern { category: "Most spent", value: "Housing (₹25,000)" },
    Pattern { category: "Fastest growing", value: "Food (+32%)" },
    Pattern { category: "Biggest saving", value: "Transport (-18%)" },
    Pattern { category: "Average daily", value: "₹1,800/day" },
];
