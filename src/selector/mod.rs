use crate::common::{MarketDataSource, RandomSource, ScreenerError};
use std::sync::Arc;
use std::time::Duration;

/// Draws one tradeable pair per request from the exchange's symbol universe.
pub struct SymbolSelector {
    source: Arc<dyn MarketDataSource>,
    rng: Arc<dyn RandomSource>,
    timeout: Duration,
}

impl SymbolSelector {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        rng: Arc<dyn RandomSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            rng,
            timeout,
        }
    }

    /// Fetches the symbol list and picks one pair ending in `quote_suffix`.
    ///
    /// # Errors
    /// `NoCandidates` when nothing matches the suffix, `Timeout` when the list
    /// does not arrive in time, or whatever the source reports.
    pub async fn pick_symbol(&self, quote_suffix: &str) -> Result<String, ScreenerError> {
        tracing::info!("Fetching symbol list...");
        let symbols = tokio::time::timeout(self.timeout, self.source.default_symbols())
            .await
            .map_err(|_| ScreenerError::Timeout {
                what: "symbol list fetch".to_string(),
                after: self.timeout,
            })??;

        let symbol = choose_symbol(&symbols, quote_suffix, self.rng.as_ref())?;
        tracing::info!(%symbol, "Selected symbol");
        Ok(symbol)
    }
}

/// Uniform pick among `symbols` that end with `quote_suffix`.
pub fn choose_symbol(
    symbols: &[String],
    quote_suffix: &str,
    rng: &dyn RandomSource,
) -> Result<String, ScreenerError> {
    let candidates: Vec<&String> = symbols
        .iter()
        .filter(|s| s.ends_with(quote_suffix))
        .collect();
    tracing::info!(
        "Found {} {} pairs out of {} symbols.",
        candidates.len(),
        quote_suffix,
        symbols.len()
    );

    if candidates.is_empty() {
        return Err(ScreenerError::NoCandidates {
            quote: quote_suffix.to_string(),
        });
    }

    // Clamp in case a test double hands back an out-of-range index
    let index = rng.pick_index(candidates.len()).min(candidates.len() - 1);
    Ok(candidates[index].clone())
}
