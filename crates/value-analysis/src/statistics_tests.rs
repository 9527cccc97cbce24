#[cfg(test)]
mod tests {
    use super::super::metrics::Metric;
    use super::super::statistics::*;
    use statement_core::{AnalysisError, FinancialSeries, YearFinancials};

    #[test]
    fn mean_basic() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        assert!((mean(&values).unwrap() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_series_fails() {
        assert!(matches!(
            mean(&[]),
            Err(AnalysisError::InsufficientSamples { actual: 0, .. })
        ));
    }

    #[test]
    fn sample_std_dev_uses_bessel_correction() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        // variance = (15^2 + 5^2 + 5^2 + 15^2) / 3 = 500/3
        let expected = (500.0_f64 / 3.0).sqrt();
        assert!((sample_std_dev(&values).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn sample_std_dev_needs_two_samples() {
        let result = sample_std_dev(&[42.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientSamples {
                required: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn summarize_combines_both() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        let summary = summarize(&values).unwrap();
        assert!((summary.mean - 25.0).abs() < 1e-12);
        assert!((summary.std_dev - (500.0_f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn metric_series_is_chronological_and_any_length() {
        let mut series = FinancialSeries::new();
        for (year, net, shares) in [(2020, 300, 10), (2018, 100, 10), (2019, 200, 10)] {
            series.insert(YearFinancials {
                year,
                net_earnings: net,
                shares_outstanding: shares,
                ..Default::default()
            });
        }

        let net = metric_series(&series, Metric::NetEarnings);
        assert_eq!(net, vec![100.0, 200.0, 300.0]);

        let eps = metric_series(&series, Metric::PerShareEarnings);
        assert_eq!(eps, vec![10.0, 20.0, 30.0]);

        let summary = summarize(&net).unwrap();
        assert!((summary.mean - 200.0).abs() < 1e-12);
    }
}
