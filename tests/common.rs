#![allow(dead_code)]

use async_trait::async_trait;
use mexc_coin_screener::{
    FacetKind, MarketDataSource, RandomSource, ReplySink, ScreenerError,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SYMBOL: &str = "BTCUSDT";

/// How the mock answers one endpoint.
#[derive(Debug, Clone)]
pub enum Reply {
    Payload(Value),
    Fail,
    Hang,
    Panic,
}

/// In-memory exchange. Every facet answers with a well-formed payload unless
/// overridden.
pub struct MockSource {
    symbols: Reply,
    replies: HashMap<FacetKind, Reply>,
    pub calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn healthy(symbols: &[&str]) -> Self {
        let mut replies = HashMap::new();
        replies.insert(FacetKind::OrderBookTop, Reply::Payload(depth_payload()));
        replies.insert(FacetKind::Stats24h, Reply::Payload(ticker_24h_payload()));
        replies.insert(FacetKind::LastPrice, Reply::Payload(ticker_price_payload()));
        replies.insert(FacetKind::BestBidAsk, Reply::Payload(book_ticker_payload()));
        replies.insert(FacetKind::AveragePrice, Reply::Payload(avg_price_payload()));
        replies.insert(
            FacetKind::Candles,
            Reply::Payload(candles_payload(100.0, 106.0, 13)),
        );

        Self {
            symbols: Reply::Payload(json!(symbols)),
            replies,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, kind: FacetKind, reply: Reply) -> Self {
        self.replies.insert(kind, reply);
        self
    }

    pub fn with_symbols(mut self, reply: Reply) -> Self {
        self.symbols = reply;
        self
    }

    pub fn failing_symbols(self) -> Self {
        self.with_symbols(Reply::Fail)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, kind: FacetKind, call: String) -> Result<Value, ScreenerError> {
        self.calls.lock().unwrap().push(call);
        let reply = self.replies.get(&kind).cloned().unwrap_or(Reply::Fail);
        match reply {
            Reply::Payload(value) => Ok(value),
            Reply::Fail => Err(ScreenerError::ApiError(format!(
                "Mock API error: {:?} unavailable",
                kind
            ))),
            Reply::Hang => std::future::pending().await,
            Reply::Panic => panic!("mock {:?} endpoint panicked", kind),
        }
    }
}

#[async_trait]
impl MarketDataSource for MockSource {
    async fn default_symbols(&self) -> Result<Vec<String>, ScreenerError> {
        self.calls.lock().unwrap().push("defaultSymbols".to_string());
        match self.symbols.clone() {
            Reply::Payload(value) => Ok(serde_json::from_value(value)?),
            Reply::Fail => Err(ScreenerError::ApiError("Mock API error: symbols".to_string())),
            Reply::Hang => std::future::pending().await,
            Reply::Panic => panic!("mock symbol list endpoint panicked"),
        }
    }

    async fn depth(&self, symbol: &str, limit: u32) -> Result<Value, ScreenerError> {
        self.answer(
            FacetKind::OrderBookTop,
            format!("depth {} limit={}", symbol, limit),
        )
        .await
    }

    async fn ticker_24h(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.answer(FacetKind::Stats24h, format!("ticker/24hr {}", symbol))
            .await
    }

    async fn ticker_price(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.answer(FacetKind::LastPrice, format!("ticker/price {}", symbol))
            .await
    }

    async fn book_ticker(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.answer(FacetKind::BestBidAsk, format!("ticker/bookTicker {}", symbol))
            .await
    }

    async fn avg_price(&self, symbol: &str) -> Result<Value, ScreenerError> {
        self.answer(FacetKind::AveragePrice, format!("avgPrice {}", symbol))
            .await
    }

    async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Value, ScreenerError> {
        self.answer(
            FacetKind::Candles,
            format!("klines {} interval={} limit={}", symbol, interval, limit),
        )
        .await
    }
}

/// Always returns the same index.
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&self, _len: usize) -> usize {
        self.0
    }
}

/// Walks through the given indices, wrapping into range.
pub struct SequenceRandom {
    indices: Vec<usize>,
    next: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&self, len: usize) -> usize {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.indices[i % self.indices.len()] % len
    }
}

/// Captures every outbound message.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send(&self, destination_id: i64, text: &str) -> Result<(), ScreenerError> {
        if self.fail {
            return Err(ScreenerError::Transport("chat not found".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((destination_id, text.to_string()));
        Ok(())
    }
}

pub fn depth_payload() -> Value {
    json!({
        "lastUpdateId": 3818270116u64,
        "bids": [["64250.11", "0.512"], ["64250.00", "1.2"]],
        "asks": [["64251.37", "0.004"], ["64252.00", "0.3"]]
    })
}

pub fn ticker_24h_payload() -> Value {
    json!({
        "symbol": "BTCUSDT",
        "priceChange": "812.4",
        "lastPrice": "64250.55",
        "highPrice": "65010.00",
        "lowPrice": "63001.20",
        "volume": "10234.118"
    })
}

pub fn ticker_price_payload() -> Value {
    json!({ "symbol": "BTCUSDT", "price": "64250.60" })
}

pub fn book_ticker_payload() -> Value {
    json!({
        "symbol": "BTCUSDT",
        "bidPrice": "64250.11",
        "bidQty": "0.512",
        "askPrice": "64251.37",
        "askQty": "0.004"
    })
}

pub fn avg_price_payload() -> Value {
    json!({ "mins": 5, "price": "64248.97" })
}

/// `count` hourly klines from `first_open` to `last_close`, MEXC row layout.
pub fn candles_payload(first_open: f64, last_close: f64, count: usize) -> Value {
    let start = 1_718_000_000_000i64;
    let hour = 3_600_000i64;
    let rows: Vec<Value> = (0..count)
        .map(|i| {
            let open = if i == 0 { first_open } else { first_open + i as f64 * 0.1 };
            let close = if i + 1 == count { last_close } else { open + 0.05 };
            let open_time = start + i as i64 * hour;
            json!([
                open_time,
                open.to_string(),
                (open.max(close) + 1.0).to_string(),
                (open.min(close) - 1.0).to_string(),
                close.to_string(),
                "1520.5",
                open_time + hour - 1,
                "97650.2"
            ])
        })
        .collect();
    Value::Array(rows)
}
