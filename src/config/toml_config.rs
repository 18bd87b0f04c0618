use crate::config::ReportConfig;
use crate::utils::error::{ReportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// On-disk configuration. Every key is optional; missing keys keep the
/// built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub tournament: Option<TournamentConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub max_game_id: Option<u32>,
    pub progress_interval: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ReportError::Config {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TTT_BASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_report_config(self) -> ReportConfig {
        let mut config = ReportConfig::default();

        if let Some(server) = self.server {
            if let Some(base_url) = server.base_url {
                config.base_url = base_url;
            }
            if let Some(timeout) = server.timeout_seconds {
                config.timeout_seconds = timeout;
            }
        }

        if let Some(tournament) = self.tournament {
            if let Some(max_game_id) = tournament.max_game_id {
                config.max_game_id = max_game_id;
            }
            if let Some(interval) = tournament.progress_interval {
                config.progress_interval = interval;
            }
        }

        config
    }
}
