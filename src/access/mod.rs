//! Allow-list gate in front of every command.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a command was issued from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChatKind {
    /// One-to-one chat with the bot.
    Direct,
    /// Group, supergroup or channel.
    Group,
}

impl ChatKind {
    /// Maps a Telegram `chat.type` string. Anything other than `private` is a group.
    pub fn from_telegram(chat_type: &str) -> Self {
        if chat_type == "private" {
            ChatKind::Direct
        } else {
            ChatKind::Group
        }
    }
}

/// Identities allowed to talk to the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessList {
    pub owner_id: i64,
    pub allowed_chats: HashSet<i64>,
}

impl AccessList {
    pub fn new(owner_id: i64, allowed_chats: impl IntoIterator<Item = i64>) -> Self {
        Self {
            owner_id,
            allowed_chats: allowed_chats.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    list: AccessList,
}

impl AccessGate {
    pub fn new(list: AccessList) -> Self {
        Self { list }
    }

    pub fn access_list(&self) -> &AccessList {
        &self.list
    }

    /// Direct chats are reserved for the owner; groups must be on the allow-list.
    pub fn is_authorized(&self, requester_id: i64, destination_id: i64, kind: ChatKind) -> bool {
        let allowed = match kind {
            ChatKind::Direct => requester_id == self.list.owner_id,
            ChatKind::Group => self.list.allowed_chats.contains(&destination_id),
        };

        tracing::info!(
            requester_id,
            destination_id,
            ?kind,
            allowed,
            "Checking access"
        );

        allowed
    }
}
