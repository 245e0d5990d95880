//! Reference and event loading
//!
//! Reads the event log and the player/team tables from JSON arrays and
//! builds id lookups. Files are read fully and closed before decoding.

use crate::models::{Event, Identified, PlayerRecord, TeamRecord};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading input data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type DataResult<T> = Result<T, DataError>;

/// Player id -> record
pub type PlayerIndex = FxHashMap<i64, PlayerRecord>;

/// Team id -> record
pub type TeamIndex = FxHashMap<i64, TeamRecord>;

/// Load a JSON array of records from a file
pub fn load_records<T: DeserializeOwned>(path: &Path) -> DataResult<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&content).map_err(|source| DataError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load a JSON array of records from any reader. `label` names the source in errors.
pub fn records_from_reader<T: DeserializeOwned, R: Read>(
    reader: R,
    label: &str,
) -> DataResult<Vec<T>> {
    serde_json::from_reader(reader).map_err(|source| DataError::Decode {
        path: PathBuf::from(label),
        source,
    })
}

/// Index records by id. Duplicate ids overwrite earlier entries.
pub fn index_by_id<T: Identified>(records: Vec<T>) -> FxHashMap<i64, T> {
    let mut index = FxHashMap::default();
    for record in records {
        index.insert(record.id(), record);
    }
    index
}

pub fn load_events(path: &Path) -> DataResult<Vec<Event>> {
    load_records(path)
}

pub fn load_players(path: &Path) -> DataResult<PlayerIndex> {
    load_records(path).map(index_by_id)
}

pub fn load_teams(path: &Path) -> DataResult<TeamIndex> {
    load_records(path).map(index_by_id)
}

pub fn events_from_reader<R: Read>(reader: R, label: &str) -> DataResult<Vec<Event>> {
    records_from_reader(reader, label)
}

pub fn players_from_reader<R: Read>(reader: R, label: &str) -> DataResult<PlayerIndex> {
    records_from_reader(reader, label).map(index_by_id)
}

pub fn teams_from_reader<R: Read>(reader: R, label: &str) -> DataResult<TeamIndex> {
    records_from_reader(reader, label).map(index_by_id)
}

/// Everything the pipeline reads from disk
#[derive(Debug, Default)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub players: PlayerIndex,
    pub teams: TeamIndex,
}

impl Dataset {
    pub fn load(events: &Path, players: &Path, teams: &Path) -> DataResult<Self> {
        Ok(Self {
            events: load_events(events)?,
            players: load_players(players)?,
            teams: load_teams(teams)?,
        })
    }
}
