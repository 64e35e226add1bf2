//! Capture log location.
//!
//! The capture log normally sits under the agent's data directory:
//!
//! `<BFG_DATA>/mqft/logs/<coordination QM>/agents/<agent>/logs/capture0.log`
//!
//! An explicit path (command line or `MFT_CAPTURE_LOG_PATH`) overrides the
//! derivation entirely.

mod agent_config;
mod error;


pub use agent_config::{AgentConfig, QueueManagerRef};
pub use error::LocateError;

use std::env;
use std::path::PathBuf;

pub const ENV_CAPTURE_LOG_PATH: &str = "MFT_CAPTURE_LOG_PATH";
pub const ENV_AGENT_CONFIG_FILE: &str = "MFT_AGENT_CONFIG_FILE";
pub const ENV_COORDINATION_QM: &str = "MFT_COORDINATION_QM";
pub const ENV_AGENT_NAME: &str = "MFT_AGENT_NAME";
pub const ENV_DATA_ROOT: &str = "BFG_DATA";

const CAPTURE_LOG_FILE: &str = "capture0.log";

/// Everything the log path can be derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorInputs {
    pub capture_log: Option<PathBuf>,
    pub agent_config_file: Option<PathBuf>,
    pub coordination_qm: Option<String>,
    pub agent_name: Option<String>,
    pub data_root: Option<PathBuf>,
}

impl LocatorInputs {
    /// Reads the derivation inputs from the process environment.
    ///
    /// `capture_log` is taken as given; the command line layer already
    /// folds `MFT_CAPTURE_LOG_PATH` into it.
    pub fn from_env(capture_log: Option<PathBuf>) -> Self {
        Self {
            capture_log,
            agent_config_file: non_empty_var(ENV_AGENT_CONFIG_FILE).map(PathBuf::from),
            coordination_qm: non_empty_var(ENV_COORDINATION_QM),
            agent_name: non_empty_var(ENV_AGENT_NAME),
            data_root: non_empty_var(ENV_DATA_ROOT).map(PathBuf::from),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn resolve_log_path(inputs: &LocatorInputs) -> Result<PathBuf, LocateError> {
    if let Some(path) = &inputs.capture_log {
        return Ok(path.clone());
    }

    let coordination_qm = match &inputs.agent_config_file {
        Some(file) => AgentConfig::from_file(file)?
            .coordination_queue_manager()
            .map(str::to_string),
        None => inputs.coordination_qm.clone(),
    }
    .ok_or(LocateError::MissingCoordinationQueueManager)?;

    let agent_name = inputs
        .agent_name
        .as_deref()
        .ok_or(LocateError::MissingAgentName)?;
    let data_root = inputs
        .data_root
        .as_deref()
        .ok_or(LocateError::MissingDataRoot)?;

    let path = data_root
        .join("mqft")
        .join("logs")
        .join(&coordination_qm)
        .join("agents")
        .join(agent_name)
        .join("logs")
        .join(CAPTURE_LOG_FILE);

    tracing::debug!(path = %path.display(), "derived capture log path");
    Ok(path)
}
