use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to read agent configuration file {path}: {source}")]
    ReadAgentConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse agent configuration file {path}: {source}")]
    ParseAgentConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to determine coordination queue manager name")]
    MissingCoordinationQueueManager,

    #[error("failed to determine agent name")]
    MissingAgentName,

    #[error("failed to determine the managed file transfer data directory")]
    MissingDataRoot,
}

impl LocateError {
    /// What the operator should set to fix the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LocateError::MissingCoordinationQueueManager => Some(
                "Set MFT_COORDINATION_QM to the coordination queue manager name,\n\
                 or MFT_AGENT_CONFIG_FILE to an agent configuration file that names it.",
            ),
            LocateError::MissingAgentName => {
                Some("Set MFT_AGENT_NAME to the name of the agent.")
            }
            LocateError::MissingDataRoot => Some(
                "Set BFG_DATA to the managed file transfer data directory,\n\
                 or pass --lf <capture log file> / set MFT_CAPTURE_LOG_PATH.",
            ),
            LocateError::ReadAgentConfig { .. } | LocateError::ParseAgentConfig { .. } => None,
        }
    }
}
