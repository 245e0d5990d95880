//! Core data models for passnet
//!
//! Records deserialized from the event log and the player/team reference
//! tables. Only the fields the pipeline reads are modeled; everything else
//! in the source JSON is ignored.

use serde::{Deserialize, Serialize};

/// Event name of a pass
pub const PASS_EVENT: &str = "Pass";

/// Tag id marking an accurate (completed) pass
pub const ACCURATE_PASS_TAG: i64 = 1801;

/// A tag attached to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<i64>,
}

impl Tag {
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// One recorded match action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    #[serde(rename = "playerId", default)]
    pub player_id: Option<i64>,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<i64>,
    #[serde(rename = "matchId", default)]
    pub match_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Event {
    /// True when this event is a pass carrying the accurate-pass tag
    pub fn is_accurate_pass(&self) -> bool {
        self.event_name.as_deref() == Some(PASS_EVENT)
            && self.tags.iter().any(|t| t.id == Some(ACCURATE_PASS_TAG))
    }

    pub fn has_tag(&self, id: i64) -> bool {
        self.tags.iter().any(|t| t.id == Some(id))
    }
}

/// Player reference record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "wyId")]
    pub wy_id: i64,
    /// Raw last name, possibly holding backslash-escaped code points
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

/// Team reference record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "wyId")]
    pub wy_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl TeamRecord {
    /// Display name, falling back to `Team <id>`
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) => name.to_string(),
            None => fallback_team_name(self.wy_id),
        }
    }
}

pub fn fallback_team_name(team_id: i64) -> String {
    format!("Team {}", team_id)
}

/// Records keyed by a numeric `wyId`
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for PlayerRecord {
    fn id(&self) -> i64 {
        self.wy_id
    }
}

impl Identified for TeamRecord {
    fn id(&self) -> i64 {
        self.wy_id
    }
}
