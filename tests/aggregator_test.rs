mod common;
use common::{MockSource, Reply, TEST_SYMBOL};
use mexc_coin_screener::aggregator::{AggregatorSettings, FacetKind, FieldValue, MarketAggregator};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn aggregator(source: Arc<MockSource>) -> MarketAggregator {
    MarketAggregator::new(
        source,
        AggregatorSettings {
            timeout: Duration::from_millis(200),
            ..AggregatorSettings::default()
        },
    )
}

#[tokio::test]
async fn test_all_facets_present() {
    let source = Arc::new(MockSource::healthy(&[TEST_SYMBOL]));
    let facets = aggregator(source).fetch_facets(TEST_SYMBOL).await;

    assert_eq!(facets.present(), FacetKind::ALL.to_vec());
    assert!(facets.absent().is_empty());

    let book = facets.order_book_top.as_ref().unwrap();
    assert_eq!(book.best_ask.price, FieldValue::from("64251.37"));
    assert_eq!(book.best_ask.qty, FieldValue::from("0.004"));
    assert_eq!(book.best_bid.price, FieldValue::from("64250.11"));

    let stats = facets.stats_24h.as_ref().unwrap();
    assert_eq!(stats.last_price.to_string(), "64250.55");
    assert_eq!(stats.volume.to_string(), "10234.118");

    assert_eq!(facets.last_price.as_ref().unwrap().price.to_string(), "64250.60");
    assert_eq!(facets.best_bid_ask.as_ref().unwrap().ask_qty.to_string(), "0.004");

    let avg = facets.average_price.as_ref().unwrap();
    assert_eq!(avg.mins.to_string(), "5");
    assert_eq!(avg.price.to_string(), "64248.97");

    let candles = facets.candles.as_ref().unwrap();
    assert_eq!(candles.len(), 13);
    assert_eq!(candles[0].open, 100.0);
    assert_eq!(candles[12].close, 106.0);
}

#[tokio::test]
async fn test_fixed_request_parameters() {
    let source = Arc::new(MockSource::healthy(&[TEST_SYMBOL]));
    aggregator(source.clone()).fetch_facets(TEST_SYMBOL).await;

    let calls = source.calls();
    assert_eq!(calls.len(), 6, "one attempt per facet: {:?}", calls);
    assert!(calls.contains(&"depth BTCUSDT limit=5".to_string()));
    assert!(calls.contains(&"klines BTCUSDT interval=60m limit=13".to_string()));
}

#[tokio::test]
async fn test_every_failure_combination_marks_exactly_those_absent() {
    for mask in 0u32..(1 << FacetKind::ALL.len()) {
        let failing: Vec<FacetKind> = FacetKind::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, kind)| kind)
            .collect();

        let source = failing
            .iter()
            .fold(MockSource::healthy(&[TEST_SYMBOL]), |source, kind| {
                source.with(*kind, Reply::Fail)
            });

        let facets = aggregator(Arc::new(source)).fetch_facets(TEST_SYMBOL).await;
        assert_eq!(facets.absent(), failing, "mask {:06b}", mask);
    }
}

#[tokio::test]
async fn test_malformed_payloads_are_absent() {
    let source = MockSource::healthy(&[TEST_SYMBOL])
        // 24h ticker without lastPrice
        .with(
            FacetKind::Stats24h,
            Reply::Payload(json!({"highPrice": "1", "lowPrice": "0.5", "volume": "10"})),
        )
        // MEXC error body returned with a 200
        .with(
            FacetKind::LastPrice,
            Reply::Payload(json!({"code": -1121, "msg": "Invalid symbol."})),
        )
        // Empty book side
        .with(
            FacetKind::OrderBookTop,
            Reply::Payload(json!({"bids": [], "asks": [["1.0", "2.0"]]})),
        )
        .with(
            FacetKind::BestBidAsk,
            Reply::Payload(json!({"bidPrice": "1.0", "askPrice": "1.1"})),
        )
        .with(FacetKind::AveragePrice, Reply::Payload(json!({"price": "1.0"})))
        // Kline row too short
        .with(
            FacetKind::Candles,
            Reply::Payload(json!([[1718000000000i64, "1.0", "1.1"]])),
        );

    let facets = aggregator(Arc::new(source)).fetch_facets(TEST_SYMBOL).await;
    assert_eq!(facets.absent(), FacetKind::ALL.to_vec());
}

#[tokio::test]
async fn test_numeric_fields_accepted() {
    let source = MockSource::healthy(&[TEST_SYMBOL])
        .with(FacetKind::LastPrice, Reply::Payload(json!({"price": 64250.6})))
        .with(
            FacetKind::Candles,
            Reply::Payload(json!([[1718000000000i64, 1.5, 2.0, 1.0, 1.75, 10]])),
        );

    let facets = aggregator(Arc::new(source)).fetch_facets(TEST_SYMBOL).await;
    assert_eq!(facets.last_price.unwrap().price.to_string(), "64250.6");

    let candles = facets.candles.unwrap();
    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].open, 1.5);
    assert_eq!(candles[0].close, 1.75);
    assert_eq!(candles[0].volume, 10.0);
    assert!(candles[0].opened_at().is_some());
}

#[tokio::test]
async fn test_hanging_facet_times_out_alone() {
    let source = MockSource::healthy(&[TEST_SYMBOL])
        .with(FacetKind::Candles, Reply::Hang)
        .with(FacetKind::Stats24h, Reply::Hang);

    let started = Instant::now();
    let facets = aggregator(Arc::new(source)).fetch_facets(TEST_SYMBOL).await;

    assert_eq!(facets.absent(), vec![FacetKind::Stats24h, FacetKind::Candles]);
    // Both timeouts run side by side, not one after the other
    assert!(started.elapsed() < Duration::from_secs(2));
}
