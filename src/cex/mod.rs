pub mod mexc;

// Re-export
pub use mexc::{MEXC_API_BASE, Mexc};
