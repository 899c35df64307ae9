use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ScreenerError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("No {quote} pairs found")]
    NoCandidates { quote: String },

    #[error("{what} timed out after {after:?}")]
    Timeout { what: String, after: Duration },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Tip pool must contain at least one tip")]
    EmptyTipPool,

    #[error("Transport error: {0}")]
    Transport(String),
}
