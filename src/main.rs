//! MEXC random coin screener bot.

use mexc_coin_screener::{
    AggregatorSettings, Config, ExchangeTrait, Mexc, Screener, ScreenerError, ScreenerSettings,
    TelegramBot, ThreadRandom, TipPool,
};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ScreenerError> {
    // .env may carry RUST_LOG, so load it before the filter reads the environment
    mexc_coin_screener::config::load_dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting bot...");

    let config = Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let mexc = Arc::new(Mexc::with_base(&config.mexc_api_base, config.http_timeout)?);
    if let Err(e) = mexc.health_check().await {
        tracing::warn!("MEXC health check failed, continuing anyway: {}", e);
    }

    let settings = ScreenerSettings {
        quote_suffix: config.quote_suffix.clone(),
        symbol_timeout: config.http_timeout,
        aggregator: AggregatorSettings {
            timeout: config.http_timeout,
            ..AggregatorSettings::default()
        },
        tips: TipPool::default(),
    };

    let screener = Arc::new(Screener::new(
        config.access.clone(),
        mexc,
        Arc::new(ThreadRandom),
        settings,
    ));

    let bot = Arc::new(TelegramBot::new(
        &config.telegram_api_base,
        config.telegram_bot_token.clone(),
    )?);
    bot.start_polling(screener).await;

    Ok(())
}
