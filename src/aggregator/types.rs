use crate::common::{ScreenerError, value_to_f64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;

/// The six independently fetched slices of market data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetKind {
    OrderBookTop,
    Stats24h,
    LastPrice,
    BestBidAsk,
    AveragePrice,
    Candles,
}

impl FacetKind {
    /// Report order.
    pub const ALL: [FacetKind; 6] = [
        FacetKind::OrderBookTop,
        FacetKind::Stats24h,
        FacetKind::LastPrice,
        FacetKind::BestBidAsk,
        FacetKind::AveragePrice,
        FacetKind::Candles,
    ];
}

/// A value the exchange may send either quoted or as a bare JSON number.
/// Rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Parsing from a raw endpoint payload. A payload that lacks the expected
/// fields is an error here and an absent facet one level up.
pub trait Facet: Sized {
    const KIND: FacetKind;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError>;
}

fn from_serde<T: DeserializeOwned>(payload: Value) -> Result<T, ScreenerError> {
    Ok(serde_json::from_value(payload)?)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: FieldValue,
    pub qty: FieldValue,
}

// GET /depth -> {"lastUpdateId":..,"bids":[["price","qty"],..],"asks":[..]}
#[derive(Debug, Deserialize)]
struct DepthPayload {
    asks: Vec<Vec<FieldValue>>,
    bids: Vec<Vec<FieldValue>>,
}

/// Best level on each side of the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookTop {
    pub best_ask: BookLevel,
    pub best_bid: BookLevel,
}

impl OrderBookTop {
    fn top_level(levels: &[Vec<FieldValue>], side: &str) -> Result<BookLevel, ScreenerError> {
        match levels.first().map(Vec::as_slice) {
            Some([price, qty, ..]) => Ok(BookLevel {
                price: price.clone(),
                qty: qty.clone(),
            }),
            _ => Err(ScreenerError::ApiError(format!("Empty {} side", side))),
        }
    }
}

impl Facet for OrderBookTop {
    const KIND: FacetKind = FacetKind::OrderBookTop;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        let depth: DepthPayload = from_serde(payload)?;
        Ok(Self {
            best_ask: Self::top_level(&depth.asks, "ask")?,
            best_bid: Self::top_level(&depth.bids, "bid")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats24h {
    #[serde(rename = "lastPrice")]
    pub last_price: FieldValue,
    #[serde(rename = "highPrice")]
    pub high_price: FieldValue,
    #[serde(rename = "lowPrice")]
    pub low_price: FieldValue,
    pub volume: FieldValue,
}

impl Facet for Stats24h {
    const KIND: FacetKind = FacetKind::Stats24h;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        from_serde(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPrice {
    pub price: FieldValue,
}

impl Facet for LastPrice {
    const KIND: FacetKind = FacetKind::LastPrice;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        from_serde(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestBidAsk {
    #[serde(rename = "bidPrice")]
    pub bid_price: FieldValue,
    #[serde(rename = "bidQty")]
    pub bid_qty: FieldValue,
    #[serde(rename = "askPrice")]
    pub ask_price: FieldValue,
    #[serde(rename = "askQty")]
    pub ask_qty: FieldValue,
}

impl Facet for BestBidAsk {
    const KIND: FacetKind = FacetKind::BestBidAsk;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        from_serde(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragePrice {
    pub mins: FieldValue,
    pub price: FieldValue,
}

impl Facet for AveragePrice {
    const KIND: FacetKind = FacetKind::AveragePrice;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        from_serde(payload)
    }
}

/// One kline: `[openTime, open, high, low, close, volume, closeTime, quoteVolume]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn from_row(row: &[Value]) -> Result<Self, ScreenerError> {
        let [open_time, open, high, low, close, volume, ..] = row else {
            return Err(ScreenerError::ApiError(format!(
                "Kline row has {} fields, expected at least 6",
                row.len()
            )));
        };

        Ok(Self {
            open_time: open_time
                .as_i64()
                .ok_or_else(|| ScreenerError::ApiError("Invalid open time format".to_string()))?,
            open: value_to_f64(open, "open")?,
            high: value_to_f64(high, "high")?,
            low: value_to_f64(low, "low")?,
            close: value_to_f64(close, "close")?,
            volume: value_to_f64(volume, "volume")?,
        })
    }

    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.open_time)
    }
}

impl Facet for Vec<Candle> {
    const KIND: FacetKind = FacetKind::Candles;

    fn from_payload(payload: Value) -> Result<Self, ScreenerError> {
        let rows: Vec<Vec<Value>> = from_serde(payload)?;
        rows.iter().map(|row| Candle::from_row(row)).collect()
    }
}

/// Outcome of one aggregation pass. `None` marks a facet that failed, timed
/// out or came back without its expected fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketFacets {
    pub order_book_top: Option<OrderBookTop>,
    pub stats_24h: Option<Stats24h>,
    pub last_price: Option<LastPrice>,
    pub best_bid_ask: Option<BestBidAsk>,
    pub average_price: Option<AveragePrice>,
    pub candles: Option<Vec<Candle>>,
}

impl MarketFacets {
    pub fn is_present(&self, kind: FacetKind) -> bool {
        match kind {
            FacetKind::OrderBookTop => self.order_book_top.is_some(),
            FacetKind::Stats24h => self.stats_24h.is_some(),
            FacetKind::LastPrice => self.last_price.is_some(),
            FacetKind::BestBidAsk => self.best_bid_ask.is_some(),
            FacetKind::AveragePrice => self.average_price.is_some(),
            FacetKind::Candles => self.candles.is_some(),
        }
    }

    pub fn present(&self) -> Vec<FacetKind> {
        FacetKind::ALL
            .into_iter()
            .filter(|kind| self.is_present(*kind))
            .collect()
    }

    pub fn absent(&self) -> Vec<FacetKind> {
        FacetKind::ALL
            .into_iter()
            .filter(|kind| !self.is_present(*kind))
            .collect()
    }
}
