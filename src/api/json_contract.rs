use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

use super::SelectionChange;

pub const SELECTION_CHANGE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wrapper around the host-facing selection payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChangeJsonContractV1 {
    pub schema_version: u32,
    pub change: SelectionChange,
}

impl SelectionChange {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SelectionChangeJsonContractV1 {
            schema_version: SELECTION_CHANGE_JSON_SCHEMA_V1,
            change: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to serialize selection contract v1: {e}"))
        })
    }

    /// Accepts either a bare payload or a versioned contract wrapper.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(change) = serde_json::from_str::<SelectionChange>(input) {
            return Ok(change);
        }
        let payload: SelectionChangeJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to parse selection json payload: {e}"))
        })?;
        if payload.schema_version != SELECTION_CHANGE_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidConfig(format!(
                "unsupported selection schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.change)
    }
}
