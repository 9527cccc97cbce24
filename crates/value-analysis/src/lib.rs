pub mod metrics;
pub mod rating;
pub mod statistics;

pub use metrics::Metric;
pub use rating::{ThresholdRule, ValueRatingEngine, YearRatingReport};
pub use statistics::SeriesSummary;

mod statistics_tests;
