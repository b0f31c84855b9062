//! One pass of the odds sync: fetch the outright win market, pick each
//! player's FanDuel price, and write it to the scores table.
//!
//! Feed failures abort the run before any write. Update failures are logged
//! per player and the pass carries on.

use crate::feed::{FeedError, OddsFeed, FANDUEL};
use crate::odds::format_american;
use crate::store::ScoreStore;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpdate {
    pub player_name: String,
    pub error: String,
}

/// Per-run tallies. `players` counts every record in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub players: usize,
    pub updated: usize,
    pub unmatched: usize,
    pub missing_odds: usize,
    pub failed: Vec<FailedUpdate>,
}

impl SyncReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct OddsSync<'a> {
    feed: &'a dyn OddsFeed,
    store: &'a dyn ScoreStore,
}

impl<'a> OddsSync<'a> {
    pub fn new(feed: &'a dyn OddsFeed, store: &'a dyn ScoreStore) -> Self {
        Self { feed, store }
    }

    pub async fn run(&self) -> Result<SyncReport, FeedError> {
        let response = self.feed.fetch_outrights().await?;

        info!(
            event = response.event_name.as_deref().unwrap_or("unknown event"),
            market = response.market.as_deref().unwrap_or("-"),
            last_updated = response.last_updated.as_deref().unwrap_or("-"),
            players = response.odds.len(),
            "fetched outright odds"
        );

        let mut report = SyncReport {
            players: response.odds.len(),
            ..Default::default()
        };

        for player in &response.odds {
            let Some(record) = player.book_record(FANDUEL) else {
                info!("No FanDuel odds found for {}", player.player_name);
                report.missing_odds += 1;
                continue;
            };
            let Some(price) = record.american() else {
                if record.odds.is_null() {
                    info!("No FanDuel odds found for {}", player.player_name);
                } else {
                    warn!(raw = %record.odds, "Unusable FanDuel odds for {}", player.player_name);
                }
                report.missing_odds += 1;
                continue;
            };

            let odds = format_american(price);

            match self.store.update_odds(&player.player_id, &odds).await {
                Ok(outcome) if outcome.rows_affected == 0 => {
                    warn!(
                        player_id = %player.player_id,
                        "No score row for {}; odds {} not stored", player.player_name, odds
                    );
                    report.unmatched += 1;
                }
                Ok(_) => {
                    info!("Updated odds for {}: {}", player.player_name, odds);
                    report.updated += 1;
                }
                Err(e) => {
                    error!("Error updating odds for player {}: {:#}", player.player_name, e);
                    report.failed.push(FailedUpdate {
                        player_name: player.player_name.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        info!(
            players = report.players,
            updated = report.updated,
            unmatched = report.unmatched,
            missing_odds = report.missing_odds,
            failed = report.failed.len(),
            "odds update complete"
        );

        Ok(report)
    }
}
