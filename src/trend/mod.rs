//! Twelve-hour trend read over hourly candles.

use crate::aggregator::{Candle, KLINE_LIMIT};
use serde::{Deserialize, Serialize};

/// Fewest candles the read is taken over: 13 hourly opens span 12 hours.
pub const MIN_CANDLES: usize = KLINE_LIMIT as usize;

/// Absolute percentage move beyond which the trend counts as strong.
pub const STRONG_MOVE_PERCENT: f64 = 3.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrendRegime {
    StrongUp,
    StrongDown,
    Stable,
}

impl TrendRegime {
    /// `±STRONG_MOVE_PERCENT` itself is still stable.
    pub fn from_percent_change(percent_change: f64) -> Self {
        if percent_change > STRONG_MOVE_PERCENT {
            TrendRegime::StrongUp
        } else if percent_change < -STRONG_MOVE_PERCENT {
            TrendRegime::StrongDown
        } else {
            TrendRegime::Stable
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendAnalysis {
    pub regime: TrendRegime,
    pub percent_change: f64,
    pub open_price: f64,
    pub close_price: f64,
}

/// Classifies the move from the first candle's open to the last candle's close.
///
/// Returns `None` when there are fewer than [`MIN_CANDLES`] candles or the
/// opening price is zero or not finite.
pub fn classify(candles: &[Candle]) -> Option<TrendAnalysis> {
    if candles.len() < MIN_CANDLES {
        tracing::warn!(
            count = candles.len(),
            required = MIN_CANDLES,
            "Not enough klines for trend analysis."
        );
        return None;
    }

    let first = candles.first()?;
    let last = candles.last()?;
    let open_price = first.open;
    let close_price = last.close;

    if open_price == 0.0 || !open_price.is_finite() || !close_price.is_finite() {
        tracing::warn!(open_price, close_price, "Degenerate klines, skipping trend analysis.");
        return None;
    }

    let percent_change = (close_price - open_price) / open_price * 100.0;
    let regime = TrendRegime::from_percent_change(percent_change);

    tracing::info!(
        open_price,
        close_price,
        percent_change = %format_args!("{:.2}", percent_change),
        ?regime,
        from = ?first.opened_at(),
        to = ?last.opened_at(),
        "Kline analysis"
    );

    Some(TrendAnalysis {
        regime,
        percent_change,
        open_price,
        close_price,
    })
}
