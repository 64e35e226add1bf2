use crate::locate::error::LocateError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The part of the agent configuration JSON this tool needs.
#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    #[serde(rename = "coordinationQMgr")]
    pub coordination_qmgr: Option<QueueManagerRef>,
}

#[derive(Debug, Deserialize)]
pub struct QueueManagerRef {
    pub name: Option<String>,
}

impl AgentConfig {
    pub fn from_file(path: &Path) -> Result<Self, LocateError> {
        let contents = fs::read_to_string(path).map_err(|source| LocateError::ReadAgentConfig {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| LocateError::ParseAgentConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn coordination_queue_manager(&self) -> Option<&str> {
        self.coordination_qmgr
            .as_ref()
            .and_then(|qm| qm.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
