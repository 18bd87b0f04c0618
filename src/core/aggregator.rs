use crate::core::board::Board;
use crate::core::directory::{find_participant, parse_participants, partition_active};
use crate::domain::model::{Participant, Standing, Standings, TournamentReport, WinTally};
use crate::domain::ports::{ConfigProvider, TournamentSource};
use crate::utils::error::Result;

pub const FIRST_GAME_ID: u32 = 1;

type ProgressHook = Box<dyn Fn(u32) + Send + Sync>;

/// Scores every game of the tournament against the active roster.
///
/// Games are fetched strictly one after another; the first failed fetch
/// aborts the run and no partial tally is returned.
pub struct TournamentAggregator<S: TournamentSource> {
    source: S,
    max_game_id: u32,
    progress_interval: u32,
    on_progress: Option<ProgressHook>,
}

impl<S: TournamentSource> TournamentAggregator<S> {
    pub fn new<C: ConfigProvider>(source: S, config: &C) -> Self {
        Self {
            source,
            max_game_id: config.max_game_id(),
            progress_interval: config.progress_interval().max(1),
            on_progress: None,
        }
    }

    /// Called with the number of games analyzed every `progress_interval` games.
    pub fn with_progress<F>(mut self, hook: F) -> Self
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.on_progress = Some(Box::new(hook));
        self
    }

    pub async fn load_participants(&self) -> Result<Vec<Participant>> {
        let payload = self.source.fetch_roster().await?;
        let participants = parse_participants(&payload);
        tracing::debug!("Parsed {} participants from roster", participants.len());
        Ok(participants)
    }

    pub async fn count_wins<I, N>(&self, active_names: I) -> Result<WinTally>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut tally = WinTally::new(active_names);

        for game_id in FIRST_GAME_ID..=self.max_game_id {
            let raw = self.source.fetch_board(game_id).await?;
            let outcome = Board::parse(&raw).outcome();

            if let Some(label) = outcome.label() {
                if tally.record_win(label) {
                    tracing::debug!("Game {}: win credited to {}", game_id, label);
                } else {
                    tracing::trace!("Game {}: {} is not an active participant", game_id, label);
                }
            }

            if game_id % self.progress_interval == 0 {
                tracing::info!("Analyzed {} games", game_id);
                if let Some(hook) = &self.on_progress {
                    hook(game_id);
                }
            }
        }

        Ok(tally)
    }

    pub async fn run(&self) -> Result<TournamentReport> {
        let participants = self.load_participants().await?;
        self.score(participants).await
    }

    /// Scores all games for an already loaded roster.
    pub async fn score(&self, participants: Vec<Participant>) -> Result<TournamentReport> {
        let (active, inactive) = partition_active(&participants);
        tracing::info!(
            "🏁 {} active participants, {} disqualified",
            active.len(),
            inactive.len()
        );

        let tally = self
            .count_wins(active.iter().map(|p| p.name.as_str()))
            .await?;
        let standings = compute_standings(&tally, &participants);

        Ok(TournamentReport {
            participants,
            tally,
            standings,
            games_analyzed: self.max_game_id,
        })
    }
}

/// Turns the final tally into standings. Countries come from the first
/// roster entry with the winner's name.
pub fn compute_standings(tally: &WinTally, participants: &[Participant]) -> Standings {
    let mut winners: Vec<Standing> = tally
        .leaders()
        .into_iter()
        .map(|(name, wins)| Standing {
            name: name.to_string(),
            country: find_participant(participants, name).map(|p| p.country.clone()),
            wins,
        })
        .collect();

    match winners.len() {
        0 => Standings::NoWinner,
        1 => Standings::Winner(winners.remove(0)),
        _ => Standings::Tie {
            wins: winners[0].wins,
            winners,
        },
    }
}
