//! Event scanning
//!
//! One pass over the event log feeds both the player-team attribution and
//! the pass-pair tally from the shared [`qualifying_pairs`] iterator.

mod attribution;
mod qualifying;
mod tally;

pub use attribution::TeamAttribution;
pub use qualifying::{qualifying_pairs, MatchBoundary};
pub use tally::{PairKey, PassTally};

use crate::data::PlayerIndex;
use crate::models::Event;
use crate::names::normalize_name;
use tracing::debug;

/// Counters describing what the scan kept and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Qualifying (pass, next event) pairs seen
    pub qualifying: usize,
    /// Pairs counted in the tally
    pub tallied: usize,
    /// Pairs skipped because a player id was missing or unknown
    pub unresolved: usize,
    /// Names that fell back to raw text during normalization
    pub malformed_names: usize,
}

/// Output of a scan
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub attribution: TeamAttribution,
    pub tally: PassTally,
    pub stats: ScanStats,
}

/// Resolve a player id to a normalized display name
fn resolve_name(player_id: Option<i64>, players: &PlayerIndex, stats: &mut ScanStats) -> Option<String> {
    let player = players.get(&player_id?)?;
    let name = normalize_name(player.last_name.as_deref());
    if name.is_malformed() {
        stats.malformed_names += 1;
    }
    Some(name.into_string())
}

/// Scan the event log once, building attribution and tally together
pub fn scan_events(events: &[Event], players: &PlayerIndex, boundary: MatchBoundary) -> ScanResult {
    let mut result = ScanResult::default();

    for (current, next) in qualifying_pairs(events, boundary) {
        result.stats.qualifying += 1;

        let passer = resolve_name(current.player_id, players, &mut result.stats);
        let receiver = resolve_name(next.player_id, players, &mut result.stats);

        if let (Some(name), Some(team_id)) = (passer.as_deref(), current.team_id) {
            result.attribution.observe(name, team_id);
        }
        if let (Some(name), Some(team_id)) = (receiver.as_deref(), next.team_id) {
            result.attribution.observe(name, team_id);
        }

        match (passer, receiver) {
            (Some(passer), Some(receiver)) => {
                result.tally.record(&passer, &receiver);
                result.stats.tallied += 1;
            }
            _ => result.stats.unresolved += 1,
        }
    }

    debug!(
        "Scanned {} events: {} qualifying passes, {} tallied, {} unresolved, {} attributed players",
        events.len(),
        result.stats.qualifying,
        result.stats.tallied,
        result.stats.unresolved,
        result.attribution.len()
    );

    result
}

/// Build the attribution on its own
pub fn attribute_teams(events: &[Event], players: &PlayerIndex, boundary: MatchBoundary) -> TeamAttribution {
    scan_events(events, players, boundary).attribution
}

/// Build the tally on its own
pub fn tally_passes(events: &[Event], players: &PlayerIndex, boundary: MatchBoundary) -> PassTally {
    scan_events(events, players, boundary).tally
}
