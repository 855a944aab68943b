use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

use super::{EngineSnapshot, ScatterEngineConfig};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl ScatterEngineConfig {
    pub fn to_json_pretty(&self) -> ScatterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a config; fields other than `layout` may be omitted.
    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input)?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScatterError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
