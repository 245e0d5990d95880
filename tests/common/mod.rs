//! Shared fixtures for integration tests
//!
//! A small World Cup slice:
//! - Pavard and Varane pass back and forth (2 accurate passes between them)
//! - Pavard finds Kanté across a match boundary
//! - an unknown player id breaks one chain
//! - Modric passes to Rakitic for Croatia
//! - a duel and an inaccurate pass never qualify

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub const FRANCE: i64 = 4418;
pub const CROATIA: i64 = 9598;

pub struct Fixture {
    pub events: PathBuf,
    pub players: PathBuf,
    pub teams: PathBuf,
}

fn event(name: &str, player: Option<i64>, team: i64, match_id: i64, tags: &[i64]) -> Value {
    let tags: Vec<Value> = tags.iter().map(|id| json!({ "id": id })).collect();
    json!({
        "eventName": name,
        "playerId": player,
        "teamId": team,
        "matchId": match_id,
        "eventSec": 12.5,
        "tags": tags,
    })
}

pub fn events() -> Value {
    json!([
        event("Pass", Some(1), FRANCE, 1, &[1801]),
        event("Pass", Some(2), FRANCE, 1, &[1801]),
        event("Pass", Some(1), FRANCE, 1, &[1801]),
        event("Duel", Some(3), FRANCE, 2, &[701]),
        event("Pass", Some(3), FRANCE, 2, &[1802]),
        event("Pass", Some(3), FRANCE, 2, &[1801]),
        event("Pass", Some(999), FRANCE, 2, &[1801]),
        event("Pass", Some(4), CROATIA, 2, &[1801]),
        event("Duel", Some(5), CROATIA, 2, &[]),
    ])
}

/// Kanté's last name carries an escaped code point, as in the source data
pub fn escaped_kante() -> String {
    format!("Kant{}u00e9", '\\')
}

pub fn players() -> Value {
    json!([
        { "wyId": 1, "lastName": "Pavard", "firstName": "Benjamin" },
        { "wyId": 2, "lastName": "Varane" },
        { "wyId": 3, "lastName": escaped_kante() },
        { "wyId": 4, "lastName": "Modric" },
        { "wyId": 5, "lastName": "Rakitic" },
    ])
}

pub fn teams() -> Value {
    json!([
        { "wyId": FRANCE, "name": "France", "type": "national" },
        { "wyId": CROATIA, "name": "Croatia" },
    ])
}

/// Write the fixture files into `dir`
pub fn write_fixture(dir: &Path) -> Fixture {
    let data = dir.join("Soccer_Data");
    std::fs::create_dir_all(data.join("events")).unwrap();

    let fixture = Fixture {
        events: data.join("events").join("events_World_Cup.json"),
        players: data.join("players.json"),
        teams: data.join("teams.json"),
    };
    std::fs::write(&fixture.events, events().to_string()).unwrap();
    std::fs::write(&fixture.players, players().to_string()).unwrap();
    std::fs::write(&fixture.teams, teams().to_string()).unwrap();
    fixture
}
