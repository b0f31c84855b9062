use super::{ScoreStore, UpdateOutcome};
use crate::feed::types::PlayerId;
use crate::http::error_body;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// PostgREST client for the hosted scores table, authorized with the
/// service-role key.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_key: String,
    table: String,
}

#[derive(Serialize)]
struct OddsPatch<'a> {
    odds: &'a str,
}

impl SupabaseStore {
    pub fn new(base_url: &str, service_key: String, table: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build database HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            table: table.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ScoreStore for SupabaseStore {
    async fn update_odds(&self, player_id: &PlayerId, odds: &str) -> Result<UpdateOutcome> {
        let filter = format!("eq.{}", player_id);
        let resp = self
            .client
            .patch(self.table_url())
            .query(&[("player_id", filter.as_str())])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(&OddsPatch { odds })
            .send()
            .await
            .context("database update request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = error_body(resp).await;
            anyhow::bail!("update {} failed ({}): {}", self.table, status, body);
        }

        // return=representation echoes every updated row
        let rows: Vec<serde_json::Value> = resp
            .json()
            .await
            .context("failed to parse database update response")?;

        Ok(UpdateOutcome {
            rows_affected: rows.len(),
        })
    }
}
