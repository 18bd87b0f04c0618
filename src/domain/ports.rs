use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream tournament server. Each call is a single request; failures are
/// returned as-is and never retried.
#[async_trait]
pub trait TournamentSource: Send + Sync {
    /// Raw participant listing (`/jugadors`).
    async fn fetch_roster(&self) -> Result<String>;

    /// Raw board text for one game (`/partida/{id}`).
    async fn fetch_board(&self, game_id: u32) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn max_game_id(&self) -> u32;
    fn progress_interval(&self) -> u32;
    fn timeout_seconds(&self) -> u64;
}
