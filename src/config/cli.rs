use crate::config::toml_config::TomlConfig;
use crate::config::ReportConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tictactoe-report")]
#[command(about = "Scores every game of a tic-tac-toe tournament and prints the ranking")]
pub struct CliConfig {
    #[arg(long, env = "TTT_BASE_URL", help = "Tournament server base URL [default: http://localhost:8080]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Last game id to score, starting from 1 [default: 10000]")]
    pub max_game_id: Option<u32>,

    #[arg(long, help = "Print progress every N games [default: 1000]")]
    pub progress_interval: Option<u32>,

    #[arg(long, help = "Per-request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with [server] and [tournament] settings")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if given, then applies flags passed on the
    /// command line on top of it.
    pub fn resolve(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                TomlConfig::from_file(path)?.into_report_config()
            }
            None => ReportConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(max_game_id) = self.max_game_id {
            config.max_game_id = max_game_id;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        Ok(config)
    }
}
