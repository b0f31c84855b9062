pub mod supabase;

use crate::feed::types::PlayerId;
use anyhow::Result;
use async_trait::async_trait;

/// Result of a single-row partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub rows_affected: usize,
}

/// Write side of the player scores table. Only the `odds` column is touched.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn update_odds(&self, player_id: &PlayerId, odds: &str) -> Result<UpdateOutcome>;
}
