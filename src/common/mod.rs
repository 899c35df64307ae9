pub mod client;
pub mod errors;
pub mod exchange;
pub mod random;
pub mod utils;

// Re-export
pub use client::{DEFAULT_TIMEOUT, create_http_client};
pub use errors::ScreenerError;
pub use exchange::{ExchangeTrait, MarketDataSource};
pub use random::{RandomSource, ThreadRandom};
pub use utils::{code_span, escape_markdown, parse_f64, value_to_f64};
