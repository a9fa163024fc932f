use crate::{ContainerStateSnapshot, CoreError};
use boxstate_time::TimestampError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const DEFAULT_MINIMUM_RUNNING: Duration = Duration::from_secs(1);

/// How long a container must have been running before it counts as ready.
///
/// Stored as TOML with the duration in milliseconds:
///
/// ```toml
/// minimum_running_ms = 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessPolicy {
    #[serde(
        rename = "minimum_running_ms",
        with = "millis",
        default = "default_minimum_running"
    )]
    pub minimum_running: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            minimum_running: DEFAULT_MINIMUM_RUNNING,
        }
    }
}

impl ReadinessPolicy {
    pub fn new(minimum_running: Duration) -> Self {
        Self { minimum_running }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        toml::from_str(content)
            .map_err(|e| CoreError::Config(format!("invalid readiness policy: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let policy = Self::from_toml_str(&content)?;
        debug!(
            "loaded readiness policy from {}: minimum {}ms",
            path.display(),
            policy.minimum_running.as_millis()
        );
        Ok(policy)
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("cannot serialize readiness policy: {e}")))?;
        std::fs::write(path, content)?;
        debug!("saved readiness policy to {}", path.display());
        Ok(())
    }

    pub fn is_satisfied_by(
        &self,
        state: &ContainerStateSnapshot,
        now: DateTime<Utc>,
    ) -> Result<bool, TimestampError> {
        crate::classify::is_running(state, self.minimum_running, now)
    }
}

fn default_minimum_running() -> Duration {
    DEFAULT_MINIMUM_RUNNING
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
