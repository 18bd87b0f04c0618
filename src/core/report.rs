use crate::domain::model::{Participant, Standing, Standings};
use std::io::{self, Write};

/// Console rendering of the roster, progress and final results.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn participants(&mut self, participants: &[Participant]) -> io::Result<()> {
        writeln!(self.out, "=== PARTICIPANTS ===")?;
        for participant in participants {
            writeln!(self.out, "{}", participant_line(participant))?;
        }
        Ok(())
    }

    pub fn results(&mut self, standings: &Standings) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== FINAL RESULTS ===")?;
        match standings {
            Standings::NoWinner => writeln!(
                self.out,
                "No winners (every game was invalid or there were no active participants)"
            ),
            Standings::Winner(winner) => writeln!(
                self.out,
                "🏆 WINNER: {} with {} wins!",
                with_country(winner),
                winner.wins
            ),
            Standings::Tie { wins, winners } => {
                writeln!(
                    self.out,
                    "🤝 TIE between {} players with {} wins each:",
                    winners.len(),
                    wins
                )?;
                for winner in winners {
                    writeln!(self.out, "- {}", with_country(winner))?;
                }
                Ok(())
            }
        }
    }
}

pub fn participant_line(participant: &Participant) -> String {
    let status = if participant.disqualified {
        "DISQUALIFIED"
    } else {
        "Active"
    };
    format!("{} ({}) - {}", participant.name, participant.country, status)
}

pub fn progress_line(games_analyzed: u32) -> String {
    format!("Analyzed {} games...", games_analyzed)
}

fn with_country(standing: &Standing) -> String {
    match &standing.country {
        Some(country) => format!("{} ({})", standing.name, country),
        None => standing.name.clone(),
    }
}
