use crate::domain::ports::{ConfigProvider, TournamentSource};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `TournamentSource` backed by the tournament HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTournamentClient {
    client: Client,
    base_url: String,
}

impl HttpTournamentClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn roster_url(&self) -> String {
        format!("{}/jugadors", self.base_url)
    }

    pub fn board_url(&self, game_id: u32) -> String {
        format!("{}/partida/{}", self.base_url, game_id)
    }

    async fn get_text(&self, url: String) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("❌ {} responded with {}", url, status);
            return Err(ReportError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TournamentSource for HttpTournamentClient {
    async fn fetch_roster(&self) -> Result<String> {
        self.get_text(self.roster_url()).await
    }

    async fn fetch_board(&self, game_id: u32) -> Result<String> {
        self.get_text(self.board_url(game_id)).await
    }
}
