//! screener-cli: fetch one symbol's financial statements and print its
//! value-investing metrics, ratings, and earnings dispersion.
//!
//! Usage:
//!   cargo run -p screener-cli -- AAPL
//!   cargo run -p screener-cli -- --mock AAPL
//!
//! The live client reads RAPID_API_YAHOO_KEY from the environment
//! (or a .env file); --mock runs against embedded fixture payloads.

use anyhow::Context;
use value_analysis::metrics::Metric;
use value_analysis::{statistics, ValueRatingEngine};
use yahoo_client::{MockYahooClient, StatementAssembler, StatementProvider, YahooClient};

const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 2018..=2022;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screener_cli=info,yahoo_client=warn".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_mock = args.iter().any(|a| a == "--mock");
    let symbol = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "AAPL".to_string());

    let provider: Box<dyn StatementProvider> = if use_mock {
        Box::new(MockYahooClient::new())
    } else {
        let api_key = std::env::var("RAPID_API_YAHOO_KEY")
            .context("RAPID_API_YAHOO_KEY not set (use --mock for fixture data)")?;
        Box::new(YahooClient::new(api_key))
    };

    tracing::info!(%symbol, mock = use_mock, "fetching statements");
    let income = provider.income_statement(&symbol).await?;
    let info = provider.stock_info(&symbol).await?;
    let balance = provider.balance_sheet(&symbol).await?;

    let assembler = StatementAssembler::new(SUPPORTED_YEARS);
    let series = assembler.assemble(&income, info.data.shares_outstanding, &balance)?;
    tracing::info!(years = series.len(), "assembled financial series");

    let engine = ValueRatingEngine::new();

    println!("{symbol} value rating");
    for year in series.iter() {
        let report = engine.rate_year(year);
        println!("\n== {} ==", report.year);
        for rating in &report.ratings {
            println!(
                "  {:<36} {:>14.4}  {}",
                rating.metric.label(),
                rating.value,
                rating.outcome.label()
            );
        }
        println!(
            "  {:<36} {:>14}  {}",
            "ShortVsLongTermDebt",
            "",
            report.short_vs_long_term_debt.label()
        );
        println!(
            "  {:<36} {:>14}  {}",
            "IncomeTaxLegitimacy",
            "",
            report.income_tax_legitimacy.label()
        );
    }

    println!("\n== series ==");
    for metric in [Metric::NetEarnings, Metric::PerShareEarnings] {
        let values = statistics::metric_series(&series, metric);
        match statistics::summarize(&values) {
            Ok(summary) => println!(
                "  {:<36} mean {:>16.2}  std dev {:>16.2}",
                metric.label(),
                summary.mean,
                summary.std_dev
            ),
            Err(e) => tracing::warn!(metric = metric.label(), error = %e, "series statistics unavailable"),
        }
    }
    println!(
        "  {:<36} {}",
        "NetEarningsTrend",
        engine.net_earnings_trend(&series).label()
    );
    println!(
        "  {:<36} {}",
        "PerShareEarningsTrend",
        engine.per_share_earnings_trend(&series).label()
    );

    Ok(())
}
