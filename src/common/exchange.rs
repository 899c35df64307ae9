use crate::common::ScreenerError;
use async_trait::async_trait;
use serde_json::Value;

// Common exchange trait definition
#[async_trait]
pub trait ExchangeTrait: Send + Sync {
    // Exchange specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn exchange_name(&self) -> &str;

    // Default implementations
    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, ScreenerError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        let response = self.client().get(&url).query(query).send().await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScreenerError::ApiError(format!(
                "{} API error: {} - {}",
                self.exchange_name(),
                status,
                error_text
            )));
        }

        Ok(response.json().await?)
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), ScreenerError>;
}

/// Read-only market data endpoints the screener consumes.
///
/// Facet methods hand back the raw JSON payload. Field validation happens in the
/// aggregator so a payload missing its expected fields becomes an absent facet
/// instead of an error.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Full list of symbols the exchange exposes through its public API.
    async fn default_symbols(&self) -> Result<Vec<String>, ScreenerError>;

    /// Order book limited to the top `limit` levels per side.
    async fn depth(&self, symbol: &str, limit: u32) -> Result<Value, ScreenerError>;

    async fn ticker_24h(&self, symbol: &str) -> Result<Value, ScreenerError>;

    async fn ticker_price(&self, symbol: &str) -> Result<Value, ScreenerError>;

    async fn book_ticker(&self, symbol: &str) -> Result<Value, ScreenerError>;

    async fn avg_price(&self, symbol: &str) -> Result<Value, ScreenerError>;

    /// Candlesticks, oldest first.
    async fn klines(&self, symbol: &str, interval: &str, limit: u32)
    -> Result<Value, ScreenerError>;
}
