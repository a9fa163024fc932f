use crate::classify::is_stopped;
use crate::ContainerStateSnapshot;
use boxstate_time::TimestampError;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle position of a container, derived from one snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContainerPhase {
    /// Never started: not running, no start or finish time.
    Created,
    Running,
    /// Running but suspended.
    Paused,
    /// Ran and recorded a finish time.
    Exited,
    /// Not running, started, but no finish time recorded yet.
    Transitional,
}

impl std::fmt::Display for ContainerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerPhase::Created => write!(f, "created"),
            ContainerPhase::Running => write!(f, "running"),
            ContainerPhase::Paused => write!(f, "paused"),
            ContainerPhase::Exited => write!(f, "exited"),
            ContainerPhase::Transitional => write!(f, "transitional"),
        }
    }
}

pub fn phase(state: &ContainerStateSnapshot) -> Result<ContainerPhase, TimestampError> {
    if state.running {
        return Ok(if state.paused {
            ContainerPhase::Paused
        } else {
            ContainerPhase::Running
        });
    }
    if is_stopped(state)? {
        return Ok(ContainerPhase::Exited);
    }
    if state.started()?.is_set() {
        Ok(ContainerPhase::Transitional)
    } else {
        Ok(ContainerPhase::Created)
    }
}
