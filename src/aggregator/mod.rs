use crate::common::{DEFAULT_TIMEOUT, MarketDataSource, ScreenerError};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

mod types;
pub use types::{
    AveragePrice, BestBidAsk, BookLevel, Candle, Facet, FacetKind, FieldValue, LastPrice,
    MarketFacets, OrderBookTop, Stats24h,
};

/// Number of hourly klines requested; also the minimum the trend read needs.
pub const KLINE_LIMIT: u32 = 13;

/// Fixed request parameters for one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorSettings {
    pub depth_limit: u32,
    /// MEXC spells one hour as `60m`.
    pub kline_interval: String,
    pub kline_limit: u32,
    /// Applied to every facet fetch individually.
    pub timeout: Duration,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            depth_limit: 5,
            kline_interval: "60m".to_string(),
            kline_limit: KLINE_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Market aggregator - fetches every facet for one symbol and keeps whatever arrives
pub struct MarketAggregator {
    source: Arc<dyn MarketDataSource>,
    settings: AggregatorSettings,
}

impl MarketAggregator {
    pub fn new(source: Arc<dyn MarketDataSource>, settings: AggregatorSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    /// Fetches all six facets in parallel, one attempt each.
    ///
    /// Never fails: a facet whose request errors, times out or returns an
    /// unexpected shape is left as `None` and the others are unaffected.
    pub async fn fetch_facets(&self, symbol: &str) -> MarketFacets {
        let source = self.source.as_ref();
        let settings = &self.settings;

        tracing::info!(%symbol, "Fetching market data for selected symbol...");

        let (order_book_top, stats_24h, last_price, best_bid_ask, average_price, candles) = tokio::join!(
            self.fetch::<OrderBookTop>(source.depth(symbol, settings.depth_limit)),
            self.fetch::<Stats24h>(source.ticker_24h(symbol)),
            self.fetch::<LastPrice>(source.ticker_price(symbol)),
            self.fetch::<BestBidAsk>(source.book_ticker(symbol)),
            self.fetch::<AveragePrice>(source.avg_price(symbol)),
            self.fetch::<Vec<Candle>>(source.klines(
                symbol,
                &settings.kline_interval,
                settings.kline_limit
            )),
        );

        let facets = MarketFacets {
            order_book_top,
            stats_24h,
            last_price,
            best_bid_ask,
            average_price,
            candles,
        };

        tracing::info!(
            %symbol,
            present = ?facets.present(),
            absent = ?facets.absent(),
            "Market data collected"
        );

        facets
    }

    async fn fetch<F: Facet>(
        &self,
        request: impl Future<Output = Result<Value, ScreenerError>>,
    ) -> Option<F> {
        let kind = F::KIND;

        let payload = match tokio::time::timeout(self.settings.timeout, request).await {
            Ok(Ok(payload)) => payload,
            Ok(Err(e)) => {
                tracing::warn!(?kind, error = %e, "Facet fetch failed");
                return None;
            }
            Err(_) => {
                tracing::warn!(?kind, timeout = ?self.settings.timeout, "Facet fetch timed out");
                return None;
            }
        };

        tracing::debug!(?kind, %payload, "Facet payload");

        match F::from_payload(payload) {
            Ok(facet) => Some(facet),
            Err(e) => {
                tracing::warn!(?kind, error = %e, "Facet payload malformed");
                None
            }
        }
    }
}
