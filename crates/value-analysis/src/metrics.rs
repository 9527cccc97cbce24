//! Pure ratio derivations over a single [`YearFinancials`].
//!
//! Divisions follow IEEE-754: a structurally zero denominator (zero
//! revenue, zero gross profit, zero current liabilities, ...) produces
//! an infinity or NaN instead of an error. Callers that feed these
//! values into the rating engine get an indeterminate outcome for
//! non-finite inputs, so check `is_finite()` before using a value
//! anywhere else.

use serde::{Deserialize, Serialize};
use statement_core::YearFinancials;

/// GrossProfit = totalRevenue - costOfRevenue
pub fn gross_profit(y: &YearFinancials) -> i64 {
    y.total_revenue - y.cost_of_revenue
}

/// GrossProfitMargin = GrossProfit / totalRevenue
pub fn gross_profit_margin(y: &YearFinancials) -> f64 {
    gross_profit(y) as f64 / y.total_revenue as f64
}

/// SG&A expense as a share of gross profit.
pub fn selling_general_administrative_margin(y: &YearFinancials) -> f64 {
    y.selling_general_administrative as f64 / gross_profit(y) as f64
}

/// Interest expense as a share of gross profit.
pub fn interest_expense_margin(y: &YearFinancials) -> f64 {
    y.interest_expense as f64 / gross_profit(y) as f64
}

/// R&D expense as a share of gross profit.
pub fn research_development_margin(y: &YearFinancials) -> f64 {
    y.research_development as f64 / gross_profit(y) as f64
}

/// Derived book value: totalAssets - totalLiabilities. Distinct from the
/// reported `total_shareholders_equity` figure, which the debt rule uses.
pub fn shareholders_equity(y: &YearFinancials) -> i64 {
    y.total_assets - y.total_liabilities
}

/// CurrentRatio = totalCurrentAssets / totalCurrentLiabilities
pub fn current_ratio(y: &YearFinancials) -> f64 {
    y.total_current_assets as f64 / y.total_current_liabilities as f64
}

/// DebtToShareholderEquityRatio = totalLiabilities / reported equity.
pub fn debt_to_shareholder_equity_ratio(y: &YearFinancials) -> f64 {
    y.total_liabilities as f64 / y.total_shareholders_equity as f64
}

/// PerShareEarnings = netEarnings / sharesOutstanding
pub fn per_share_earnings(y: &YearFinancials) -> f64 {
    y.net_earnings as f64 / y.shares_outstanding as f64
}

/// Named derived metric. Values are never stored; [`derive`] recomputes
/// them from the year's facts on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    GrossProfitMargin,
    SellingGeneralAdministrativeMargin,
    InterestExpenseMargin,
    ResearchDevelopmentMargin,
    CurrentRatio,
    DebtToShareholderEquity,
    PerShareEarnings,
    NetEarnings,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::GrossProfitMargin => "GrossProfitMargin",
            Metric::SellingGeneralAdministrativeMargin => "SellingGeneralAdministrativeMargin",
            Metric::InterestExpenseMargin => "InterestExpenseMargin",
            Metric::ResearchDevelopmentMargin => "ResearchDevelopmentMargin",
            Metric::CurrentRatio => "CurrentRatio",
            Metric::DebtToShareholderEquity => "DebtToShareholderEquityRatio",
            Metric::PerShareEarnings => "PerShareEarnings",
            Metric::NetEarnings => "NetEarnings",
        }
    }
}

/// Computes the named metric for one fiscal year.
pub fn derive(metric: Metric, y: &YearFinancials) -> f64 {
    match metric {
        Metric::GrossProfitMargin => gross_profit_margin(y),
        Metric::SellingGeneralAdministrativeMargin => selling_general_administrative_margin(y),
        Metric::InterestExpenseMargin => interest_expense_margin(y),
        Metric::ResearchDevelopmentMargin => research_development_margin(y),
        Metric::CurrentRatio => current_ratio(y),
        Metric::DebtToShareholderEquity => debt_to_shareholder_equity_ratio(y),
        Metric::PerShareEarnings => per_share_earnings(y),
        Metric::NetEarnings => y.net_earnings as f64,
    }
}
