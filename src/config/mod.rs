//! Configuration module for the dashboard application.

// Can all be private now because we have a public re-export.
mod debug;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{PRICE_HISTORY_LEN, REFRESH_INTERVAL};
pub use debug::DF;
pub use types::{Precision, Volatility};
