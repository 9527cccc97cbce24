use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One fiscal year of income-statement and balance-sheet facts for a
/// company, identified by the calendar year of the fiscal end date.
///
/// All currency fields are raw signed integer units as reported by the
/// provider; fields absent from a source payload stay at zero. Instances
/// are built once by the assembler and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearFinancials {
    pub year: i32,

    // Income statement
    pub total_revenue: i64,
    pub cost_of_revenue: i64,
    pub selling_general_administrative: i64,
    pub interest_expense: i64,
    pub research_development: i64,
    pub income_before_tax: i64,
    pub income_tax_expense: i64,
    pub net_earnings: i64,
    pub shares_outstanding: i64,

    // Balance sheet
    pub total_current_assets: i64,
    pub total_current_liabilities: i64,
    pub total_liabilities: i64,
    pub total_shareholders_equity: i64,
    pub short_term_debt: i64,
    pub long_term_debt: i64,
    pub total_assets: i64,
}

/// Ordered fiscal year -> [`YearFinancials`] mapping for one symbol.
///
/// Iteration is always chronological. Any set of years works, contiguous
/// or sparse; nothing assumes a fixed window size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSeries {
    years: BTreeMap<i32, YearFinancials>,
}

impl FinancialSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a year, replacing any existing record for the same year.
    pub fn insert(&mut self, financials: YearFinancials) {
        self.years.insert(financials.year, financials);
    }

    pub fn get(&self, year: i32) -> Option<&YearFinancials> {
        self.years.get(&year)
    }

    pub fn get_mut(&mut self, year: i32) -> Option<&mut YearFinancials> {
        self.years.get_mut(&year)
    }

    /// Fiscal years present, in chronological order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Per-year records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &YearFinancials> {
        self.years.values()
    }

    /// Most recent fiscal year on record.
    pub fn latest(&self) -> Option<&YearFinancials> {
        self.years.values().next_back()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Qualitative classification of a financial ratio, ordered best to
/// worst: `Good < Ok < Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Good,
    Ok,
    Bad,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Good => "GOOD",
            Rating::Ok => "OK",
            Rating::Bad => "BAD",
        }
    }
}

/// Result of classifying a single metric value. A non-finite input
/// (zero denominator upstream) cannot be placed in any band and comes
/// back as `Indeterminate` rather than a misleading `Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingOutcome {
    Rated(Rating),
    Indeterminate,
}

impl RatingOutcome {
    pub fn rating(self) -> Option<Rating> {
        match self {
            RatingOutcome::Rated(r) => Some(r),
            RatingOutcome::Indeterminate => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingOutcome::Rated(r) => r.label(),
            RatingOutcome::Indeterminate => "INDETERMINATE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_orders_best_to_worst() {
        assert!(Rating::Good < Rating::Ok);
        assert!(Rating::Ok < Rating::Bad);
    }

    #[test]
    fn series_iterates_chronologically() {
        let mut series = FinancialSeries::new();
        for year in [2021, 2018, 2020, 2019] {
            series.insert(YearFinancials {
                year,
                ..Default::default()
            });
        }

        let years: Vec<i32> = series.years().collect();
        assert_eq!(years, vec![2018, 2019, 2020, 2021]);
        assert_eq!(series.latest().map(|y| y.year), Some(2021));
    }

    #[test]
    fn series_supports_sparse_years() {
        let mut series = FinancialSeries::new();
        series.insert(YearFinancials {
            year: 2015,
            ..Default::default()
        });
        series.insert(YearFinancials {
            year: 2022,
            ..Default::default()
        });

        assert_eq!(series.len(), 2);
        assert!(series.get(2018).is_none());
    }

    #[test]
    fn insert_replaces_same_year() {
        let mut series = FinancialSeries::new();
        series.insert(YearFinancials {
            year: 2020,
            total_revenue: 1,
            ..Default::default()
        });
        series.insert(YearFinancials {
            year: 2020,
            total_revenue: 2,
            ..Default::default()
        });

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(2020).unwrap().total_revenue, 2);
    }
}
