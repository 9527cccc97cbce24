//! Provider clients: the live RapidAPI-backed Yahoo client and a
//! fixture-backed mock, interchangeable behind [`StatementProvider`].

use crate::payload::{BalanceSheetResponse, IncomeStatementResponse, StockInfoResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use statement_core::AnalysisError;
use std::time::Duration;

const HOST: &str = "yahoo-finance15.p.rapidapi.com";
const ORIGIN: &str = "https://yahoo-finance15.p.rapidapi.com/api/yahoo";
const STOCK_INFO_URL: &str = "https://yahoo-finance97.p.rapidapi.com/stock-info";

/// Source of the three raw payloads the assembler consumes.
#[async_trait]
pub trait StatementProvider: Send + Sync {
    async fn income_statement(&self, symbol: &str)
        -> Result<IncomeStatementResponse, AnalysisError>;
    async fn stock_info(&self, symbol: &str) -> Result<StockInfoResponse, AnalysisError>;
    async fn balance_sheet(&self, symbol: &str) -> Result<BalanceSheetResponse, AnalysisError>;
}

#[derive(Clone)]
pub struct YahooClient {
    api_key: String,
    client: Client,
}

impl YahooClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { api_key, client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AnalysisError> {
        tracing::debug!(%url, "requesting statement payload");
        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", HOST)
            .send()
            .await
            .map_err(|e| AnalysisError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AnalysisError::ApiError(e.to_string()))
    }
}

#[async_trait]
impl StatementProvider for YahooClient {
    async fn income_statement(
        &self,
        symbol: &str,
    ) -> Result<IncomeStatementResponse, AnalysisError> {
        let url = format!("{ORIGIN}/qu/quote/{symbol}/income-statement");
        self.get_json(&url).await
    }

    async fn stock_info(&self, symbol: &str) -> Result<StockInfoResponse, AnalysisError> {
        let response = self
            .client
            .post(STOCK_INFO_URL)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", HOST)
            .form(&[("symbol", symbol)])
            .send()
            .await
            .map_err(|e| AnalysisError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AnalysisError::ApiError(e.to_string()))
    }

    async fn balance_sheet(&self, symbol: &str) -> Result<BalanceSheetResponse, AnalysisError> {
        let url = format!("{ORIGIN}/qu/quote/{symbol}/balance-sheet");
        self.get_json(&url).await
    }
}

/// Serves embedded fixture payloads regardless of symbol. Used by the
/// CLI's `--mock` mode and by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockYahooClient;

impl MockYahooClient {
    pub fn new() -> Self {
        Self
    }
}

fn parse_fixture<T: DeserializeOwned>(body: &str) -> Result<T, AnalysisError> {
    serde_json::from_str(body).map_err(|e| AnalysisError::ApiError(e.to_string()))
}

#[async_trait]
impl StatementProvider for MockYahooClient {
    async fn income_statement(
        &self,
        _symbol: &str,
    ) -> Result<IncomeStatementResponse, AnalysisError> {
        parse_fixture(include_str!("../fixtures/income.json"))
    }

    async fn stock_info(&self, _symbol: &str) -> Result<StockInfoResponse, AnalysisError> {
        parse_fixture(include_str!("../fixtures/stock-info.json"))
    }

    async fn balance_sheet(&self, _symbol: &str) -> Result<BalanceSheetResponse, AnalysisError> {
        parse_fixture(include_str!("../fixtures/balance-sheet.json"))
    }
}
