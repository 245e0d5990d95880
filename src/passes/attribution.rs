//! Player -> team attribution
//!
//! Each normalized player name is attributed to the first team it is seen
//! playing for. Later observations never overwrite it, so a player who
//! changed teams during the tournament keeps the first one.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAttribution {
    teams: FxHashMap<String, i64>,
}

impl TeamAttribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as playing for `team_id` unless it already has a team.
    ///
    /// Empty names are never recorded. Returns true if a new entry was made.
    pub fn observe(&mut self, name: &str, team_id: i64) -> bool {
        if name.is_empty() || self.teams.contains_key(name) {
            return false;
        }
        self.teams.insert(name.to_string(), team_id);
        true
    }

    pub fn team_of(&self, name: &str) -> Option<i64> {
        self.teams.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.teams.iter().map(|(name, &team)| (name.as_str(), team))
    }
}
