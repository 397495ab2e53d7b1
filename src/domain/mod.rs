// Domain types and value objects
mod ticker;
mod trend;

// Re-export commonly used types
pub use ticker::Ticker;
pub use trend::{Sentiment, Trend};
