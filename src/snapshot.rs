//! Persistence of complete game states.
//!
//! A `GameState` is plain data, RNG included, so a decoded snapshot
//! continues exactly where the original left off.
//!
//! - `encode` / `decode`: compact binary via `bincode`
//! - `to_json` / `from_json`: human-readable via `serde_json`

use thiserror::Error;

use crate::core::state::GameState;

/// Snapshot encoding or decoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a state to bytes.
pub fn encode(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Restore a state from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Serialize a state to pretty-printed JSON.
pub fn to_json(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Restore a state from JSON.
pub fn from_json(json: &str) -> Result<GameState, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
