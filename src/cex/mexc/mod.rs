mod types;
use crate::common::{
    DEFAULT_TIMEOUT, ExchangeTrait, MarketDataSource, ScreenerError, create_http_client,
};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use types::MexcDefaultSymbolsResponse;

pub const MEXC_API_BASE: &str = "https://api.mexc.com/api/v3";

pub struct Mexc {
    client: reqwest::Client,
    api_base: String,
}

impl Mexc {
    pub fn new() -> Result<Self, ScreenerError> {
        Self::with_base(MEXC_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Client against a custom REST base, every request bounded by `timeout`.
    pub fn with_base(api_base: &str, timeout: Duration) -> Result<Self, ScreenerError> {
        Ok(Self {
            client: create_http_client(timeout)?,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn symbol_query(symbol: &str) -> Result<Vec<(&'static str, String)>, ScreenerError> {
        // Validate symbol is not empty
        if symbol.is_empty() {
            return Err(ScreenerError::InvalidSymbol(
                "Symbol cannot be empty".to_string(),
            ));
        }
        Ok(vec![("symbol", symbol.to_uppercase())])
    }
}

#[async_trait]
impl ExchangeTrait for Mexc {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Mexc"
    }

    async fn health_check(&self) -> Result<(), ScreenerError> {
        // MEXC ping endpoint - test connectivity to the REST API
        self.get("ping", &[]).await?;
        Ok(())
    }
}

#[async_trait]
impl MarketDataSource for Mexc {
    async fn default_symbols(&self) -> Result<Vec<String>, ScreenerError> {
        let payload = self.get("defaultSymbols", &[]).await?;
        let response: MexcDefaultSymbolsResponse = serde_json::from_value(payload)?;
        Ok(response.data)
    }

    async fn depth(&self, symbol: &str, limit: u32) -> Result<Value, ScreenerError> {
        let mut query = Self::symbol_query(symbol)?;
        query.push(("limit", limit.to_string()));
        self.get("depth", &query).await
    }

    async fn ticker_24h(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.get("ticker/24hr", &Self::symbol_query(symbol)?).await
    }

    async fn ticker_price(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.get("ticker/price", &Self::symbol_query(symbol)?).await
    }

    async fn book_ticker(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.get("ticker/bookTicker", &Self::symbol_query(symbol)?)
            .await
    }

    async fn avg_price(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.get("avgPrice", &Self::symbol_query(symbol)?).await
    }

    async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Value, ScreenerError> {
        let mut query = Self::symbol_query(symbol)?;
        query.push(("interval", interval.to_string()));
        query.push(("limit", limit.to_string()));
        self.get("klines", &query).await
    }
}
