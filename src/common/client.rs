use crate::common::ScreenerError;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = "Mozilla/5.0 (compatible; MexcCoinScreener/0.1)";

pub fn create_http_client(timeout: Duration) -> Result<reqwest::Client, ScreenerError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}
