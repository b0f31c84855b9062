pub mod datagolf;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;
use types::OutrightsResponse;

/// Fixed request parameters for the outright winner market.
pub const TOUR: &str = "pga";
pub const MARKET: &str = "win";
pub const ODDS_FORMAT: &str = "american";

/// The only bookmaker whose prices are written to the table.
pub const FANDUEL: &str = "fanduel";

/// Failures that abort a sync run before any row is touched.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("odds feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("odds feed returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("odds feed response malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait OddsFeed: Send + Sync {
    async fn fetch_outrights(&self) -> Result<OutrightsResponse, FeedError>;
}
