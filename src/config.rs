//! Process configuration, read once at startup from the environment (and `.env`).

use crate::access::AccessList;
use crate::cex::MEXC_API_BASE;
use crate::common::{DEFAULT_TIMEOUT, ScreenerError};
use std::fmt;
use std::time::Duration;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_QUOTE_SUFFIX: &str = "USDT";

#[derive(Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_api_base: String,
    pub access: AccessList,
    pub mexc_api_base: String,
    pub quote_suffix: String,
    /// Upper bound for every exchange request.
    pub http_timeout: Duration,
}

// Keep the bot token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("telegram_api_base", &self.telegram_api_base)
            .field("access", &self.access)
            .field("mexc_api_base", &self.mexc_api_base)
            .field("quote_suffix", &self.quote_suffix)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Loads `.env` into the process environment if one exists.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

impl Config {
    pub fn from_env() -> Result<Self, ScreenerError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// # Errors
    /// `ScreenerError::Config` when `TELEGRAM_BOT_TOKEN` or `ALLOWED_USER_ID` is
    /// missing, or a numeric setting does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScreenerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram_bot_token = non_empty("TELEGRAM_BOT_TOKEN")
            .ok_or_else(|| ScreenerError::Config("TELEGRAM_BOT_TOKEN is not set".to_string()))?;

        let owner_id = non_empty("ALLOWED_USER_ID")
            .ok_or_else(|| ScreenerError::Config("ALLOWED_USER_ID is not set".to_string()))?
            .parse::<i64>()
            .map_err(|_| ScreenerError::Config("ALLOWED_USER_ID must be an integer".to_string()))?;

        let allowed_chats = non_empty("ALLOWED_CHAT_IDS")
            .map(|raw| parse_chat_ids(&raw))
            .unwrap_or_default();

        let http_timeout = match non_empty("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    ScreenerError::Config("HTTP_TIMEOUT_SECS must be a whole number".to_string())
                })?;
                if secs == 0 {
                    return Err(ScreenerError::Config(
                        "HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            telegram_bot_token,
            telegram_api_base: non_empty("TELEGRAM_API_BASE")
                .unwrap_or_else(|| TELEGRAM_API_BASE.to_string()),
            access: AccessList::new(owner_id, allowed_chats),
            mexc_api_base: non_empty("MEXC_API_BASE").unwrap_or_else(|| MEXC_API_BASE.to_string()),
            quote_suffix: non_empty("QUOTE_SUFFIX")
                .map(|s| s.to_uppercase())
                .unwrap_or_else(|| DEFAULT_QUOTE_SUFFIX.to_string()),
            http_timeout,
        })
    }
}

/// Comma-separated chat ids. Group ids are negative on Telegram; entries that
/// are not integers are skipped.
pub fn parse_chat_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(entry, "Ignoring invalid chat id in ALLOWED_CHAT_IDS");
                None
            }
        })
        .collect()
}
