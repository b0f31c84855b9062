use anyhow::{Context, Result};
use golf_odds_sync::config::Config;
use golf_odds_sync::feed::datagolf::DataGolfFeed;
use golf_odds_sync::store::supabase::SupabaseStore;
use golf_odds_sync::sync::OddsSync;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load saved keys from .env / .env.local (real env vars take precedence)
    Config::load_env_files();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("golf_odds_sync=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load_or_default(Path::new("config.toml"))?;
    let credentials = Config::credentials()?;

    let feed = DataGolfFeed::new(
        credentials.feed_api_key.clone(),
        &config.feed.base_url,
        config.feed.request_timeout(),
    )?;
    let store = SupabaseStore::new(
        &credentials.database_url,
        credentials.database_service_key.clone(),
        &config.database.table,
        config.database.request_timeout(),
    )?;

    let report = OddsSync::new(&feed, &store)
        .run()
        .await
        .context("odds sync aborted")?;

    if config.sync.fail_on_update_errors && report.has_failures() {
        let names: Vec<&str> = report.failed.iter().map(|f| f.player_name.as_str()).collect();
        anyhow::bail!("{} odds update(s) failed: {}", names.len(), names.join(", "));
    }

    Ok(())
}
