use crate::access::{AccessGate, AccessList};
use crate::aggregator::{AggregatorSettings, MarketAggregator};
use crate::common::{DEFAULT_TIMEOUT, MarketDataSource, RandomSource, ScreenerError};
use crate::report::{Report, compose};
use crate::selector::SymbolSelector;
use crate::tips::TipPool;
use crate::trend::classify;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

mod command;
pub use command::{Command, Request};

pub const WELCOME_MESSAGE: &str = "👋 Selamat datang! Gunakan /screen untuk mendapatkan koin acak dan statistik pasar dari MEXC.";

/// Outbound half of the chat transport.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, destination_id: i64, text: &str) -> Result<(), ScreenerError>;
}

#[derive(Debug, Clone)]
pub struct ScreenerSettings {
    pub quote_suffix: String,
    pub symbol_timeout: Duration,
    pub aggregator: AggregatorSettings,
    pub tips: TipPool,
}

impl Default for ScreenerSettings {
    fn default() -> Self {
        Self {
            quote_suffix: "USDT".to_string(),
            symbol_timeout: DEFAULT_TIMEOUT,
            aggregator: AggregatorSettings::default(),
            tips: TipPool::default(),
        }
    }
}

/// Screener - gates a request, picks a pair and composes its market snapshot
pub struct Screener {
    gate: AccessGate,
    selector: SymbolSelector,
    aggregator: MarketAggregator,
    tips: TipPool,
    rng: Arc<dyn RandomSource>,
    quote_suffix: String,
}

impl Screener {
    pub fn new(
        access: AccessList,
        source: Arc<dyn MarketDataSource>,
        rng: Arc<dyn RandomSource>,
        settings: ScreenerSettings,
    ) -> Self {
        Self {
            gate: AccessGate::new(access),
            selector: SymbolSelector::new(source.clone(), rng.clone(), settings.symbol_timeout),
            aggregator: MarketAggregator::new(source, settings.aggregator),
            tips: settings.tips,
            rng,
            quote_suffix: settings.quote_suffix,
        }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// One full snapshot: random pair, all facets, trend read or tip.
    pub async fn snapshot(&self) -> Result<Report, ScreenerError> {
        let symbol = self.selector.pick_symbol(&self.quote_suffix).await?;
        let facets = self.aggregator.fetch_facets(&symbol).await;

        let trend = facets.candles.as_deref().and_then(classify);
        let tip = match trend {
            Some(_) => None,
            None => Some(self.tips.pick(self.rng.as_ref())),
        };

        tracing::info!(%symbol, "Building response message...");
        Ok(compose(&symbol, &facets, trend.as_ref(), tip))
    }

    /// Reply text for `request`, or `None` when nothing should be sent.
    ///
    /// Unauthorized callers get no reply at all. Failures other than an empty
    /// pair list are logged and swallowed so no error detail reaches a chat.
    pub async fn handle(&self, request: &Request) -> Option<String> {
        tracing::info!(
            command = ?request.command,
            requester_id = request.requester_id,
            destination_id = request.destination_id,
            "Command received"
        );

        if !self.gate.is_authorized(
            request.requester_id,
            request.destination_id,
            request.destination_kind,
        ) {
            tracing::warn!(
                command = ?request.command,
                requester_id = request.requester_id,
                "Unauthorized access attempt"
            );
            return None;
        }

        match request.command {
            Command::Start => Some(WELCOME_MESSAGE.to_string()),
            Command::Screen => match self.snapshot().await {
                Ok(report) => Some(report.into_string()),
                Err(ScreenerError::NoCandidates { quote }) => {
                    tracing::warn!("No {} pairs found.", quote);
                    Some(no_pairs_message(&quote))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error in /screen command");
                    None
                }
            },
        }
    }

    /// Handles `request` and delivers the reply, if any, through `sink`.
    pub async fn serve(&self, request: &Request, sink: &dyn ReplySink) {
        let Some(text) = self.handle(request).await else {
            return;
        };

        if let Err(e) = sink.send(request.destination_id, &text).await {
            tracing::error!(
                destination_id = request.destination_id,
                error = %e,
                "Failed to send reply"
            );
        }
    }

    /// Serves `request` on its own task so a panic while handling it stays
    /// contained. Returns `false` when the handler aborted.
    pub async fn dispatch(self: Arc<Self>, request: Request, sink: Arc<dyn ReplySink>) -> bool {
        let command = request.command;
        let handle = tokio::spawn(async move {
            self.serve(&request, sink.as_ref()).await;
        });

        match handle.await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(?command, "Command handler aborted: {}", e);
                false
            }
        }
    }
}

pub fn no_pairs_message(quote: &str) -> String {
    format!("⚠️ Tidak ada pasangan {} ditemukan.", quote)
}
