use crate::domain::model::Participant;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PARTICIPANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"participant\s+"([^"]+)"\s+"([^"]+)""#).expect("participant pattern is valid")
});

static DISQUALIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"desqualificada\s+"([^"]+)""#).expect("disqualification pattern is valid")
});

/// Extracts every `participant "<name>" "<country>"` declaration in order of
/// appearance. Duplicates are kept; a name is disqualified when any
/// `desqualificada "<name>"` declaration mentions it.
pub fn parse_participants(payload: &str) -> Vec<Participant> {
    let disqualified: HashSet<&str> = DISQUALIFIED_RE
        .captures_iter(payload)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    PARTICIPANT_RE
        .captures_iter(payload)
        .map(|caps| {
            let name = caps[1].to_string();
            let country = caps[2].to_string();
            let disqualified = disqualified.contains(name.as_str());
            Participant {
                name,
                country,
                disqualified,
            }
        })
        .collect()
}

/// First participant registered under `name`.
pub fn find_participant<'a>(participants: &'a [Participant], name: &str) -> Option<&'a Participant> {
    participants.iter().find(|p| p.name == name)
}

/// Splits the roster into (active, disqualified), keeping order.
pub fn partition_active(participants: &[Participant]) -> (Vec<&Participant>, Vec<&Participant>) {
    participants.iter().partition(|p| p.is_active())
}
