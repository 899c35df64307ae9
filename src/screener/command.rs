use crate::access::ChatKind;

/// Bot commands the screener answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Screen,
}

impl Command {
    /// Parses `/start`, `/screen` or `/randomcoin`, with or without an
    /// `@botname` suffix and trailing arguments. Anything else is `None`.
    ///
    /// A command addressed to some other bot is `None` once `bot_username` is
    /// known; without it every `@botname` suffix is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let word = text.trim().strip_prefix('/')?.split_whitespace().next()?;
        let (name, addressee) = match word.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee)),
            None => (word, None),
        };

        let addressed_elsewhere = matches!(
            (addressee, bot_username),
            (Some(addressee), Some(own)) if !addressee.eq_ignore_ascii_case(own.trim_start_matches('@'))
        );
        if addressed_elsewhere {
            return None;
        }

        match name.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "screen" | "randomcoin" => Some(Command::Screen),
            _ => None,
        }
    }
}

/// Inbound command event handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub requester_id: i64,
    pub destination_id: i64,
    pub destination_kind: ChatKind,
    pub command: Command,
}

impl Request {
    pub fn new(
        requester_id: i64,
        destination_id: i64,
        destination_kind: ChatKind,
        command: Command,
    ) -> Self {
        Self {
            requester_id,
            destination_id,
            destination_kind,
            command,
        }
    }
}
