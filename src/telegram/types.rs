use crate::access::ChatKind;
use crate::screener::{Command, Request};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GetUpdatesResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Vec<TelegramUpdate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
    pub channel_post: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    pub from: Option<TelegramUser>,
    pub chat: TelegramChat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetMeResponse {
    pub ok: bool,
    pub result: Option<TelegramUser>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    pub description: Option<String>,
}

impl TelegramUpdate {
    /// The command carried by this update, if it is one the screener answers.
    ///
    /// Channel posts have no sender; their requester id is 0, which only matters
    /// for direct chats and those always carry a sender. `bot_username` filters
    /// out commands addressed to other bots.
    pub fn to_request(&self, bot_username: Option<&str>) -> Option<Request> {
        let message = self.message.as_ref().or(self.channel_post.as_ref())?;
        let command = Command::parse(message.text.as_deref()?, bot_username)?;
        let requester_id = message.from.as_ref().map_or(0, |user| user.id);

        Some(Request::new(
            requester_id,
            message.chat.id,
            ChatKind::from_telegram(&message.chat.kind),
            command,
        ))
    }
}
