//! Telegram Bot API transport
//!
//! Long-polls `getUpdates`, turns `/start` and `/screen` into screener requests
//! and posts replies with `sendMessage` in legacy Markdown.

mod types;
pub use types::{
    GetMeResponse, GetUpdatesResponse, SendMessageRequest, SendMessageResponse, TelegramChat,
    TelegramMessage, TelegramUpdate, TelegramUser,
};

use crate::common::{ScreenerError, create_http_client};
use crate::screener::{ReplySink, Screener};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Server-side long-poll window for `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 30;
const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(5);
const PARSE_MODE: &str = "Markdown";

pub struct TelegramBot {
    http: Client,
    api_base: String,
    bot_token: String,
    last_update_id: RwLock<i64>,
}

impl TelegramBot {
    pub fn new(api_base: &str, bot_token: String) -> Result<Self, ScreenerError> {
        Ok(Self {
            // Must outlive the long poll
            http: create_http_client(Duration::from_secs(POLL_TIMEOUT_SECS + 10))?,
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token,
            last_update_id: RwLock::new(0),
        })
    }

    // Telegram method URLs embed the bot token
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }

    /// Start polling for updates. Runs until the process stops.
    pub async fn start_polling(self: Arc<Self>, screener: Arc<Screener>) {
        let username = match self.get_me().await {
            Ok(me) => me.username,
            Err(e) => {
                tracing::warn!("Could not resolve bot username, accepting any @mention: {}", e);
                None
            }
        };
        tracing::info!(username = ?username, "Bot is running...");

        loop {
            match self.poll_updates().await {
                Ok(updates) => {
                    for update in updates {
                        // Update offset first so a failing command is not redelivered
                        {
                            let mut last_id = self.last_update_id.write().await;
                            *last_id = update.update_id + 1;
                        }

                        if let Some(request) = update.to_request(username.as_deref()) {
                            let sink: Arc<dyn ReplySink> = self.clone();
                            screener.clone().dispatch(request, sink).await;
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to poll Telegram updates: {}", e);
                    tokio::time::sleep(POLL_ERROR_BACKOFF).await;
                }
            }
        }
    }

    /// The bot's own account, used to recognise `/command@username`.
    pub async fn get_me(&self) -> Result<TelegramUser, ScreenerError> {
        let response: GetMeResponse = self
            .http
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(without_token)?
            .json()
            .await
            .map_err(without_token)?;

        match response.result {
            Some(user) if response.ok => Ok(user),
            _ => Err(ScreenerError::Transport(
                response
                    .description
                    .unwrap_or_else(|| "getMe returned ok=false".to_string()),
            )),
        }
    }

    async fn poll_updates(&self) -> Result<Vec<TelegramUpdate>, ScreenerError> {
        let offset = *self.last_update_id.read().await;

        let response: GetUpdatesResponse = self
            .http
            .get(self.method_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", POLL_TIMEOUT_SECS.to_string()),
            ])
            .send()
            .await
            .map_err(without_token)?
            .json()
            .await
            .map_err(without_token)?;

        if !response.ok {
            return Err(ScreenerError::Transport(
                response
                    .description
                    .unwrap_or_else(|| "getUpdates returned ok=false".to_string()),
            ));
        }

        Ok(response.result)
    }
}

fn without_token(e: reqwest::Error) -> ScreenerError {
    ScreenerError::HttpError(e.without_url())
}

#[async_trait]
impl ReplySink for TelegramBot {
    async fn send(&self, destination_id: i64, text: &str) -> Result<(), ScreenerError> {
        let request = SendMessageRequest {
            chat_id: destination_id,
            text,
            parse_mode: PARSE_MODE,
        };

        let response: SendMessageResponse = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await
            .map_err(without_token)?
            .json()
            .await
            .map_err(without_token)?;

        if !response.ok {
            return Err(ScreenerError::Transport(
                response
                    .description
                    .unwrap_or_else(|| "sendMessage returned ok=false".to_string()),
            ));
        }

        Ok(())
    }
}
