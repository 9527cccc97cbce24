//! Provider response schema. Every statement field is lenient: the
//! provider omits line items freely, and an omitted item deserializes
//! to a zero value rather than failing the whole statement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One reported line item: raw integer value plus display strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub raw: i64,
    #[serde(default)]
    pub fmt: String,
    #[serde(default, rename = "longFmt", skip_serializing_if = "Option::is_none")]
    pub long_fmt: Option<String>,
}

/// One fiscal year of the income-statement history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementRecord {
    #[serde(default)]
    pub total_revenue: RawItem,
    #[serde(default)]
    pub cost_of_revenue: RawItem,
    #[serde(default)]
    pub gross_profit: RawItem,
    #[serde(default)]
    pub selling_general_administrative: RawItem,
    #[serde(default)]
    pub interest_expense: RawItem,
    #[serde(default)]
    pub research_development: RawItem,
    #[serde(default)]
    pub income_before_tax: RawItem,
    #[serde(default)]
    pub income_tax_expense: RawItem,
    #[serde(default, rename = "netIncome")]
    pub net_income: RawItem,
    /// Fiscal period end; `fmt` carries the `YYYY-MM-DD` string.
    #[serde(default)]
    pub end_date: RawItem,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatementHistory {
    #[serde(default, rename = "incomeStatementHistory")]
    pub records: Vec<IncomeStatementRecord>,
}

/// Top-level income-statement response (v15 schema nests the history
/// under a key of the same name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatementResponse {
    #[serde(default, rename = "incomeStatementHistory")]
    pub history: IncomeStatementHistory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockInfo {
    #[serde(default, rename = "sharesOutstanding")]
    pub shares_outstanding: i64,
}

/// Stock-info response from the separate quote endpoint; only the
/// share count is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockInfoResponse {
    #[serde(default)]
    pub data: StockInfo,
}

/// One named balance-sheet line item carrying a value per fiscal year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheetItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: BTreeMap<i32, i64>,
}

/// Flat, unordered collection of balance-sheet line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheetResponse {
    #[serde(default)]
    pub items: Vec<BalanceSheetItem>,
}
