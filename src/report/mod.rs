//! Telegram Markdown rendering of one market snapshot.
//!
//! Sections appear in a fixed order and only when their facet is present:
//!
//! ```text
//! header → order book → 24h stats → price → book ticker → avg price → trend → summary
//! ```

use crate::aggregator::{
    AveragePrice, BestBidAsk, FieldValue, LastPrice, MarketFacets, OrderBookTop, Stats24h,
};
use crate::common::{code_span, escape_markdown};
use crate::trend::{TrendAnalysis, TrendRegime};
use std::fmt;

const SUMMARY_HEADING: &str = "*🧠 Ringkasan untuk Pemula:*\n";

const STRONG_UP_GUIDANCE: &str = "📌 *Saran:* Harga naik tajam selama 12 jam terakhir.\n\
🚀 Potensi tren naik, tapi tetap waspada terhadap pembalikan.\n\
💡 Pertimbangkan untuk menunggu penurunan harga sebelum beli.\n";

const STRONG_DOWN_GUIDANCE: &str = "📌 *Saran:* Harga turun cukup besar selama 12 jam terakhir.\n\
📉 Waspadai tren menurun yang masih berlanjut.\n\
💡 Tunggu konfirmasi pembalikan arah sebelum masuk.\n";

const STABLE_GUIDANCE: &str = "📌 *Saran:* Harga bergerak stabil dalam 12 jam terakhir.\n\
🔄 Cocok untuk strategi jangka pendek atau sideway trading.\n";

/// A composed, ready-to-send message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn guidance(regime: TrendRegime) -> &'static str {
    match regime {
        TrendRegime::StrongUp => STRONG_UP_GUIDANCE,
        TrendRegime::StrongDown => STRONG_DOWN_GUIDANCE,
        TrendRegime::Stable => STABLE_GUIDANCE,
    }
}

/// Builds the snapshot message. Pure: the same inputs always give the same text.
///
/// `tip` is only rendered when `trend` is `None`.
pub fn compose(
    symbol: &str,
    facets: &MarketFacets,
    trend: Option<&TrendAnalysis>,
    tip: Option<&str>,
) -> Report {
    let mut message = format!("🎯 *Today Coin:* {}\n\n", code_span(symbol));

    if let Some(book) = &facets.order_book_top {
        message.push_str(&order_book_section(book));
    }
    if let Some(stats) = &facets.stats_24h {
        message.push_str(&stats_section(stats));
    }
    if let Some(price) = &facets.last_price {
        message.push_str(&last_price_section(price));
    }
    if let Some(ticker) = &facets.best_bid_ask {
        message.push_str(&book_ticker_section(ticker));
    }
    if let Some(avg) = &facets.average_price {
        message.push_str(&average_price_section(avg));
    }

    match trend {
        Some(analysis) => {
            message.push_str(&trend_section(analysis));
            message.push_str(SUMMARY_HEADING);
            message.push_str(guidance(analysis.regime));
        }
        None => {
            message.push_str(SUMMARY_HEADING);
            if let Some(tip) = tip {
                message.push_str(&format!("\n{}\n", escape_markdown(tip)));
            }
        }
    }

    Report(message)
}

fn code(value: &FieldValue) -> String {
    code_span(&value.to_string())
}

fn plain(value: &FieldValue) -> String {
    escape_markdown(&value.to_string())
}

fn order_book_section(book: &OrderBookTop) -> String {
    format!(
        "📘 *Order Book Depth (Teratas)*\n   • Ask: {} @ {}\n   • Bid: {} @ {}\n\n",
        code(&book.best_ask.price),
        plain(&book.best_ask.qty),
        code(&book.best_bid.price),
        plain(&book.best_bid.qty),
    )
}

fn stats_section(stats: &Stats24h) -> String {
    format!(
        "📊 *Statistik 24 Jam*\n   • Terakhir: {}\n   • Tertinggi: {}\n   • Terendah: {}\n   • Volume: {}\n\n",
        code(&stats.last_price),
        code(&stats.high_price),
        code(&stats.low_price),
        code(&stats.volume),
    )
}

fn last_price_section(price: &LastPrice) -> String {
    format!("💰 *Harga Saat Ini*\n   • {}\n\n", code(&price.price))
}

fn book_ticker_section(ticker: &BestBidAsk) -> String {
    format!(
        "📒 *Book Ticker*\n   • Bid Terbaik: {} ({})\n   • Ask Terbaik: {} ({})\n\n",
        code(&ticker.bid_price),
        plain(&ticker.bid_qty),
        code(&ticker.ask_price),
        plain(&ticker.ask_qty),
    )
}

fn average_price_section(avg: &AveragePrice) -> String {
    format!(
        "📈 *Harga Rata-Rata*\n   • {} (Interval: {} menit)\n\n",
        code(&avg.price),
        plain(&avg.mins),
    )
}

fn trend_section(analysis: &TrendAnalysis) -> String {
    format!(
        "🕒 *Analisis 12 Jam Terakhir (1H Candles)*\n   • Harga Buka: {}\n   • Harga Tutup: {}\n   • Perubahan: {}\n\n",
        code_span(&analysis.open_price.to_string()),
        code_span(&analysis.close_price.to_string()),
        code_span(&format!("{:.2}%", analysis.percent_change)),
    )
}
