pub mod aggregator;
pub mod board;
pub mod directory;
pub mod report;

pub use crate::domain::model::{Outcome, Participant, Standings, TournamentReport, WinTally};
pub use crate::domain::ports::{ConfigProvider, TournamentSource};
pub use crate::utils::error::Result;
