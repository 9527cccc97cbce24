//! Mean and dispersion of a derived metric across a series of years.

use crate::metrics::{self, Metric};
use statement_core::{AnalysisError, FinancialSeries};
use statrs::statistics::Statistics;

/// Mean and sample standard deviation of one metric over a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub mean: f64,
    pub std_dev: f64,
}

/// One value per year, chronological, for the given metric.
pub fn metric_series(series: &FinancialSeries, metric: Metric) -> Vec<f64> {
    series.iter().map(|y| metrics::derive(metric, y)).collect()
}

/// Arithmetic mean of a yearly value sequence.
pub fn mean(values: &[f64]) -> Result<f64, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    Ok(values.mean())
}

/// Bessel-corrected sample standard deviation. Undefined below two
/// samples, so that surfaces as an error instead of a NaN.
pub fn sample_std_dev(values: &[f64]) -> Result<f64, AnalysisError> {
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientSamples {
            required: 2,
            actual: values.len(),
        });
    }
    Ok(values.std_dev())
}

/// Mean and sample standard deviation in one pass.
pub fn summarize(values: &[f64]) -> Result<SeriesSummary, AnalysisError> {
    Ok(SeriesSummary {
        mean: mean(values)?,
        std_dev: sample_std_dev(values)?,
    })
}
