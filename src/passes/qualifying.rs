//! Qualifying pass detection
//!
//! A qualifying pass is an accurate pass (`eventName == "Pass"` carrying tag
//! 1801). Its receiver is taken to be the player of the very next event in
//! the log, whatever that event is.

use crate::models::Event;
use serde::Deserialize;

/// How to treat a qualifying pass whose next event belongs to another match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBoundary {
    /// Pair with the next event regardless of match
    #[default]
    Ignore,
    /// Skip the pair when both events carry different match ids
    SameMatch,
}

impl MatchBoundary {
    pub fn from_flag(same_match_only: bool) -> Self {
        if same_match_only {
            MatchBoundary::SameMatch
        } else {
            MatchBoundary::Ignore
        }
    }

    fn allows(self, current: &Event, next: &Event) -> bool {
        match self {
            MatchBoundary::Ignore => true,
            MatchBoundary::SameMatch => match (current.match_id, next.match_id) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            },
        }
    }
}

/// Iterate `(pass, next_event)` for every qualifying pass that has a successor.
///
/// The last event never qualifies since it has no successor.
pub fn qualifying_pairs(
    events: &[Event],
    boundary: MatchBoundary,
) -> impl Iterator<Item = (&Event, &Event)> + '_ {
    events
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .filter(move |(current, next)| current.is_accurate_pass() && boundary.allows(current, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tag, ACCURATE_PASS_TAG};

    fn event(name: &str, player: i64, tags: &[i64]) -> Event {
        Event {
            event_name: Some(name.to_string()),
            player_id: Some(player),
            tags: tags.iter().map(|&id| Tag::new(id)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_with_next_event_of_any_type() {
        let events = vec![
            event("Pass", 1, &[ACCURATE_PASS_TAG]),
            event("Shot", 2, &[]),
        ];
        let pairs: Vec<_> = qualifying_pairs(&events, MatchBoundary::Ignore).collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.player_id, Some(1));
        assert_eq!(pairs[0].1.player_id, Some(2));
    }

    #[test]
    fn test_last_event_never_qualifies() {
        let events = vec![
            event("Duel", 1, &[]),
            event("Pass", 2, &[ACCURATE_PASS_TAG]),
        ];
        assert_eq!(qualifying_pairs(&events, MatchBoundary::Ignore).count(), 0);
    }

    #[test]
    fn test_non_qualifying_events_skipped() {
        let events = vec![
            event("Pass", 1, &[1802]),
            event("Free Kick", 2, &[ACCURATE_PASS_TAG]),
            event("Pass", 3, &[]),
            event("Pass", 4, &[1802, ACCURATE_PASS_TAG]),
            event("Pass", 5, &[]),
        ];
        let passers: Vec<_> = qualifying_pairs(&events, MatchBoundary::Ignore)
            .map(|(e, _)| e.player_id)
            .collect();
        assert_eq!(passers, vec![Some(4)]);
    }

    #[test]
    fn test_empty_and_single_event_logs() {
        assert_eq!(qualifying_pairs(&[], MatchBoundary::Ignore).count(), 0);
        let single = vec![event("Pass", 1, &[ACCURATE_PASS_TAG])];
        assert_eq!(qualifying_pairs(&single, MatchBoundary::Ignore).count(), 0);
    }

    #[test]
    fn test_match_boundary_guard() {
        let mut last_pass = event("Pass", 1, &[ACCURATE_PASS_TAG]);
        last_pass.match_id = Some(100);
        let mut kickoff = event("Pass", 2, &[]);
        kickoff.match_id = Some(200);
        let events = vec![last_pass, kickoff];

        assert_eq!(qualifying_pairs(&events, MatchBoundary::Ignore).count(), 1);
        assert_eq!(qualifying_pairs(&events, MatchBoundary::SameMatch).count(), 0);
    }

    #[test]
    fn test_match_boundary_allows_missing_ids() {
        let events = vec![
            event("Pass", 1, &[ACCURATE_PASS_TAG]),
            event("Pass", 2, &[]),
        ];
        assert_eq!(qualifying_pairs(&events, MatchBoundary::SameMatch).count(), 1);
        assert_eq!(MatchBoundary::from_flag(true), MatchBoundary::SameMatch);
        assert_eq!(MatchBoundary::from_flag(false), MatchBoundary::Ignore);
    }
}
