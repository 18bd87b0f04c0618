use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub country: String,
    pub disqualified: bool,
}

impl Participant {
    pub fn is_active(&self) -> bool {
        !self.disqualified
    }
}

/// Result of evaluating one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Player1Wins,
    Player2Wins,
    NoWinner,
}

impl Outcome {
    /// Identity credited with the win. These are fixed labels, not
    /// participant names: a win is only counted when a participant is
    /// literally registered under one of them.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Outcome::Player1Wins => Some("jugador1"),
            Outcome::Player2Wins => Some("jugador2"),
            Outcome::NoWinner => None,
        }
    }
}

/// Win counts keyed by active participant name, in first-registration order.
/// The key set is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinTally {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl WinTally {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tally = Self::default();
        for name in names {
            let name = name.into();
            if tally.index.contains_key(&name) {
                continue;
            }
            tally.index.insert(name.clone(), tally.entries.len());
            tally.entries.push((name, 0));
        }
        tally
    }

    /// Adds one win for `name`. Unknown names are ignored and yield `false`.
    pub fn record_win(&mut self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.entries[i].1 += 1;
                true
            }
            None => false,
        }
    }

    pub fn wins(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, wins)| (name.as_str(), *wins))
    }

    pub fn max_wins(&self) -> Option<u32> {
        self.entries.iter().map(|(_, wins)| *wins).max()
    }

    /// Every entry sharing the highest count, in tally order. Empty when the
    /// tally is empty or nobody won a single game.
    pub fn leaders(&self) -> Vec<(&str, u32)> {
        match self.max_wins() {
            Some(max) if max > 0 => self.iter().filter(|(_, wins)| *wins == max).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub country: Option<String>,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standings {
    NoWinner,
    Winner(Standing),
    Tie { wins: u32, winners: Vec<Standing> },
}

impl Standings {
    pub fn winners(&self) -> &[Standing] {
        match self {
            Standings::NoWinner => &[],
            Standings::Winner(standing) => std::slice::from_ref(standing),
            Standings::Tie { winners, .. } => winners,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TournamentReport {
    pub participants: Vec<Participant>,
    pub tally: WinTally,
    pub standings: Standings,
    pub games_analyzed: u32,
}
