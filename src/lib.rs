//! `mexc-coin-screener`
//!
//! Picks a random MEXC spot pair, pulls its order book, 24h stats, prices and
//! hourly klines, and composes a Telegram-ready snapshot with a 12h trend read
//! or a beginner tip.
//!
//! ## Quickstart
//!
//! ```no_run
//! use std::sync::Arc;
//! use mexc_coin_screener::{AccessList, Mexc, Screener, ScreenerSettings, ThreadRandom};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), mexc_coin_screener::ScreenerError> {
//! let screener = Screener::new(
//!     AccessList::new(42, []),
//!     Arc::new(Mexc::new()?),
//!     Arc::new(ThreadRandom),
//!     ScreenerSettings::default(),
//! );
//! let report = screener.snapshot().await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod aggregator;
pub mod cex;
pub mod common;
pub mod config;
pub mod report;
pub mod screener;
pub mod selector;
pub mod telegram;
pub mod tips;
pub mod trend;

// Re-export common types
pub use access::{AccessGate, AccessList, ChatKind};
pub use aggregator::{
    AggregatorSettings, Candle, FacetKind, FieldValue, MarketAggregator, MarketFacets,
};
pub use cex::Mexc;
pub use common::{
    ExchangeTrait, MarketDataSource, RandomSource, ScreenerError, ThreadRandom,
};
pub use config::Config;
pub use report::{Report, compose};
pub use screener::{Command, ReplySink, Request, Screener, ScreenerSettings};
pub use selector::{SymbolSelector, choose_symbol};
pub use telegram::TelegramBot;
pub use tips::TipPool;
pub use trend::{TrendAnalysis, TrendRegime, classify};
