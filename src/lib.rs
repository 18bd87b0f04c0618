pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpTournamentClient;
pub use config::ReportConfig;
pub use crate::core::{aggregator::TournamentAggregator, report::Reporter};
pub use utils::error::{ReportError, Result};
