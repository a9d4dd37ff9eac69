use serde::{Deserialize, Serialize};

use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::Renderer;

use super::{PlayAxisEngine, PlayAxisSnapshot};

pub const PLAY_AXIS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlayAxisSnapshot,
}

impl PlayAxisSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PlayAxisResult<String> {
        let payload = PlayAxisSnapshotJsonContractV1 {
            schema_version: PLAY_AXIS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlayAxisError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> PlayAxisResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PlayAxisSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PlayAxisSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlayAxisError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PLAY_AXIS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PlayAxisError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> PlayAxisEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> PlayAxisResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
