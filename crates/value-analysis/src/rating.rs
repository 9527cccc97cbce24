//! Threshold classification of derived metrics into GOOD/OK/BAD.
//!
//! Each rule is an ordered band list evaluated top to bottom; the first
//! matching band wins, otherwise the rule's declared default applies.
//! Thresholds are fixed business rules carried over literally, including
//! their rough edges (see the note on `GROSS_PROFIT_MARGIN`).

use crate::metrics::{self, Metric};
use serde::{Deserialize, Serialize};
use statement_core::{FinancialSeries, Rating, RatingOutcome, YearFinancials};

/// Predicate a metric value is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    /// value < t
    Below(f64),
    /// value > t
    Above(f64),
    /// value <= t
    AtMost(f64),
    /// lo < value < hi, both ends exclusive
    Between(f64, f64),
}

impl Threshold {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::Below(t) => value < t,
            Threshold::Above(t) => value > t,
            Threshold::AtMost(t) => value <= t,
            Threshold::Between(lo, hi) => value > lo && value < hi,
        }
    }
}

/// One metric's rating rule: ordered bands plus a fallthrough default.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    pub metric: Metric,
    pub bands: &'static [(Threshold, Rating)],
    pub default: Rating,
}

impl ThresholdRule {
    /// First-match-wins over the bands. Non-finite values fit no band
    /// and come back indeterminate.
    pub fn classify(&self, value: f64) -> RatingOutcome {
        if !value.is_finite() {
            return RatingOutcome::Indeterminate;
        }
        for (threshold, rating) in self.bands {
            if threshold.matches(value) {
                return RatingOutcome::Rated(*rating);
            }
        }
        RatingOutcome::Rated(self.default)
    }
}

/// The OK band (`< 0.375`) is shadowed by the GOOD band above it
/// (0.375 < 0.40), so no input ever rates OK. Carried as written
/// pending confirmation with the rule's author; likely an inverted
/// comparison.
pub const GROSS_PROFIT_MARGIN: ThresholdRule = ThresholdRule {
    metric: Metric::GrossProfitMargin,
    bands: &[
        (Threshold::Below(0.40), Rating::Good),
        (Threshold::Below(0.375), Rating::Ok),
    ],
    default: Rating::Bad,
};

pub const SELLING_GENERAL_ADMINISTRATIVE_MARGIN: ThresholdRule = ThresholdRule {
    metric: Metric::SellingGeneralAdministrativeMargin,
    bands: &[
        (Threshold::Below(0.30), Rating::Good),
        (Threshold::Between(0.30, 0.79), Rating::Ok),
        (Threshold::Above(0.80), Rating::Bad),
    ],
    default: Rating::Bad,
};

pub const INTEREST_EXPENSE_MARGIN: ThresholdRule = ThresholdRule {
    metric: Metric::InterestExpenseMargin,
    bands: &[
        (Threshold::Below(0.15), Rating::Good),
        (Threshold::Between(0.15, 0.35), Rating::Ok),
    ],
    default: Rating::Bad,
};

pub const RESEARCH_DEVELOPMENT_MARGIN: ThresholdRule = ThresholdRule {
    metric: Metric::ResearchDevelopmentMargin,
    bands: &[
        (Threshold::Below(0.10), Rating::Good),
        (Threshold::Between(0.10, 0.25), Rating::Ok),
    ],
    default: Rating::Bad,
};

pub const CURRENT_RATIO: ThresholdRule = ThresholdRule {
    metric: Metric::CurrentRatio,
    bands: &[(Threshold::Above(1.0), Rating::Good)],
    default: Rating::Bad,
};

/// Tests the reported equity figure, not the derived
/// assets-minus-liabilities one.
pub const DEBT_TO_SHAREHOLDER_EQUITY: ThresholdRule = ThresholdRule {
    metric: Metric::DebtToShareholderEquity,
    bands: &[(Threshold::AtMost(0.80), Rating::Good)],
    default: Rating::Bad,
};

const RULES: &[ThresholdRule] = &[
    GROSS_PROFIT_MARGIN,
    SELLING_GENERAL_ADMINISTRATIVE_MARGIN,
    INTEREST_EXPENSE_MARGIN,
    RESEARCH_DEVELOPMENT_MARGIN,
    CURRENT_RATIO,
    DEBT_TO_SHAREHOLDER_EQUITY,
];

/// One rated metric within a [`YearRatingReport`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricRating {
    pub metric: Metric,
    pub value: f64,
    pub outcome: RatingOutcome,
}

/// All ratings for one fiscal year.
#[derive(Debug, Clone, Serialize)]
pub struct YearRatingReport {
    pub year: i32,
    pub ratings: Vec<MetricRating>,
    pub short_vs_long_term_debt: Rating,
    pub income_tax_legitimacy: Rating,
}

/// Stateless value-investing classifier.
pub struct ValueRatingEngine;

impl ValueRatingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Returns the threshold rule for a metric, if one exists.
    pub fn rule(metric: Metric) -> Option<&'static ThresholdRule> {
        RULES.iter().find(|r| r.metric == metric)
    }

    /// Classifies an already-computed metric value. Metrics without a
    /// threshold rule (e.g. raw NetEarnings) are indeterminate here.
    pub fn rate(&self, metric: Metric, value: f64) -> RatingOutcome {
        match Self::rule(metric) {
            Some(rule) => rule.classify(value),
            None => RatingOutcome::Indeterminate,
        }
    }

    /// GOOD when short-term debt sits below long-term debt. Integer
    /// comparison, so no indeterminate case.
    pub fn short_vs_long_term_debt(&self, y: &YearFinancials) -> Rating {
        if y.short_term_debt < y.long_term_debt {
            Rating::Good
        } else {
            Rating::Bad
        }
    }

    /// Unimplemented legitimacy check on income tax paid; always BAD
    /// until the comparison against the statutory rate is specified.
    pub fn income_tax_legitimacy(&self, _y: &YearFinancials) -> Rating {
        Rating::Bad
    }

    /// Unimplemented trend detection over the series; always BAD.
    pub fn net_earnings_trend(&self, _series: &FinancialSeries) -> Rating {
        Rating::Bad
    }

    /// Unimplemented trend detection over the series; always BAD.
    pub fn per_share_earnings_trend(&self, _series: &FinancialSeries) -> Rating {
        Rating::Bad
    }

    /// Runs every threshold rule plus the two-input debt rule and the
    /// legitimacy stub against one fiscal year.
    pub fn rate_year(&self, y: &YearFinancials) -> YearRatingReport {
        let ratings = RULES
            .iter()
            .map(|rule| {
                let value = metrics::derive(rule.metric, y);
                MetricRating {
                    metric: rule.metric,
                    value,
                    outcome: rule.classify(value),
                }
            })
            .collect();

        YearRatingReport {
            year: y.year,
            ratings,
            short_vs_long_term_debt: self.short_vs_long_term_debt(y),
            income_tax_legitimacy: self.income_tax_legitimacy(y),
        }
    }
}

impl Default for ValueRatingEngine {
    fn default() -> Self {
        Self::new()
    }
}
