//! Maps provider payloads into a [`FinancialSeries`].

use crate::payload::{BalanceSheetResponse, IncomeStatementRecord, IncomeStatementResponse};
use chrono::{Datelike, NaiveDate};
use statement_core::{AnalysisError, FinancialSeries, YearFinancials};
use std::collections::BTreeSet;

/// Recognized balance-sheet line items, keyed by the provider's
/// canonical spelling (uppercased, whitespace stripped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BalanceField {
    TotalCurrentAssets,
    TotalCurrentLiabilities,
    TotalLiabilities,
    TotalShareholdersEquity,
    ShortTermDebt,
    LongTermDebt,
    TotalAssets,
}

fn canonical_name(name: &str) -> String {
    name.split_whitespace().collect::<String>().to_uppercase()
}

fn balance_field(name: &str) -> Option<BalanceField> {
    match canonical_name(name).as_str() {
        "TOTALCURRENTASSETS" => Some(BalanceField::TotalCurrentAssets),
        "TOTALCURRENTLIABILITIES" => Some(BalanceField::TotalCurrentLiabilities),
        "TOTALLIAB" => Some(BalanceField::TotalLiabilities),
        "TOTALSTOCKHOLDEREQUITY" => Some(BalanceField::TotalShareholdersEquity),
        "SHORTLONGTERMDEBT" => Some(BalanceField::ShortTermDebt),
        "LONGTERMDEBT" => Some(BalanceField::LongTermDebt),
        "TOTALASSETS" => Some(BalanceField::TotalAssets),
        _ => None,
    }
}

/// Calendar year of a `YYYY-MM-DD` fiscal end date.
fn fiscal_year(end_date: &str) -> Result<i32, AnalysisError> {
    NaiveDate::parse_from_str(end_date, "%Y-%m-%d")
        .map(|d| d.year())
        .map_err(|_| AnalysisError::MalformedDate(end_date.to_string()))
}

/// Builds [`YearFinancials`] out of the income-statement, stock-info and
/// balance-sheet payloads for one symbol.
///
/// The caller declares the fiscal years it is prepared to handle; an
/// income record outside that window fails assembly with
/// `UnsupportedFiscalYear` since it means the provider's schema moved
/// under us. Unrecognized balance-sheet names are ignored, and balance
/// values for years with no income record are dropped.
pub struct StatementAssembler {
    supported_years: BTreeSet<i32>,
}

impl StatementAssembler {
    pub fn new(supported_years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            supported_years: supported_years.into_iter().collect(),
        }
    }

    pub fn assemble(
        &self,
        income: &IncomeStatementResponse,
        shares_outstanding: i64,
        balance: &BalanceSheetResponse,
    ) -> Result<FinancialSeries, AnalysisError> {
        let mut series = FinancialSeries::new();

        for record in &income.history.records {
            series.insert(self.assemble_year(record, shares_outstanding)?);
        }

        self.apply_balance_sheet(&mut series, balance);
        Ok(series)
    }

    fn assemble_year(
        &self,
        record: &IncomeStatementRecord,
        shares_outstanding: i64,
    ) -> Result<YearFinancials, AnalysisError> {
        let year = fiscal_year(&record.end_date.fmt)?;
        if !self.supported_years.contains(&year) {
            return Err(AnalysisError::UnsupportedFiscalYear(year));
        }

        Ok(YearFinancials {
            year,
            total_revenue: record.total_revenue.raw,
            cost_of_revenue: record.cost_of_revenue.raw,
            selling_general_administrative: record.selling_general_administrative.raw,
            interest_expense: record.interest_expense.raw,
            research_development: record.research_development.raw,
            income_before_tax: record.income_before_tax.raw,
            income_tax_expense: record.income_tax_expense.raw,
            net_earnings: record.net_income.raw,
            shares_outstanding,
            ..Default::default()
        })
    }

    fn apply_balance_sheet(&self, series: &mut FinancialSeries, balance: &BalanceSheetResponse) {
        for item in &balance.items {
            let Some(field) = balance_field(&item.name) else {
                tracing::debug!(item = %item.name, "ignoring unrecognized balance-sheet line item");
                continue;
            };

            for (&year, &value) in &item.values {
                let Some(y) = series.get_mut(year) else {
                    continue;
                };
                match field {
                    BalanceField::TotalCurrentAssets => y.total_current_assets = value,
                    BalanceField::TotalCurrentLiabilities => y.total_current_liabilities = value,
                    BalanceField::TotalLiabilities => y.total_liabilities = value,
                    BalanceField::TotalShareholdersEquity => y.total_shareholders_equity = value,
                    BalanceField::ShortTermDebt => y.short_term_debt = value,
                    BalanceField::LongTermDebt => y.long_term_debt = value,
                    BalanceField::TotalAssets => y.total_assets = value,
                }
            }
        }
    }
}
