use crate::{ContainerPhase, TimestampError};
use boxstate_time::{parse_timestamp, Timestamp};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One read of a container's lifecycle fields as reported by the runtime.
///
/// Field names follow the runtime's `State` object (`Running`, `Paused`,
/// `StartedAt`, `FinishedAt`) so an inspect response deserializes directly.
/// Unknown fields are ignored and missing ones default to `false` / absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerStateSnapshot {
    pub running: bool,
    pub paused: bool,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

impl ContainerStateSnapshot {
    pub fn new(running: bool, paused: bool) -> Self {
        Self {
            running,
            paused,
            started_at: None,
            finished_at: None,
        }
    }

    /// A container that has never been started.
    pub fn created() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_started_at(mut self, raw: impl Into<String>) -> Self {
        self.started_at = Some(raw.into());
        self
    }

    #[must_use]
    pub fn with_finished_at(mut self, raw: impl Into<String>) -> Self {
        self.finished_at = Some(raw.into());
        self
    }

    pub fn started(&self) -> Result<Timestamp, TimestampError> {
        parse_timestamp(self.started_at.as_deref())
    }

    pub fn finished(&self) -> Result<Timestamp, TimestampError> {
        parse_timestamp(self.finished_at.as_deref())
    }

    pub fn is_running(
        &self,
        minimum_duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<bool, TimestampError> {
        crate::classify::is_running(self, minimum_duration, now)
    }

    pub fn is_stopped(&self) -> Result<bool, TimestampError> {
        crate::classify::is_stopped(self)
    }

    pub fn running_for(&self, now: DateTime<Utc>) -> Result<Option<TimeDelta>, TimestampError> {
        crate::classify::running_for(self, now)
    }

    pub fn phase(&self) -> Result<ContainerPhase, TimestampError> {
        crate::phase::phase(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxstate_time::DOCKER_TIMESTAMP_ZERO;

    #[test]
    fn created_has_no_timestamps() {
        let s = ContainerStateSnapshot::created();
        assert!(!s.running);
        assert!(!s.paused);
        assert_eq!(s.started().unwrap(), Timestamp::Unset);
        assert_eq!(s.finished().unwrap(), Timestamp::Unset);
    }

    #[test]
    fn builder_sets_fields() {
        let s = ContainerStateSnapshot::new(true, true)
            .with_started_at("2024-05-01T12:00:00Z")
            .with_finished_at(DOCKER_TIMESTAMP_ZERO);
        assert!(s.running);
        assert!(s.paused);
        assert_eq!(s.started_at.as_deref(), Some("2024-05-01T12:00:00Z"));
        assert!(s.started().unwrap().is_set());
        assert!(!s.finished().unwrap().is_set());
    }

    #[test]
    fn deserializes_runtime_field_names() {
        let json = r#"{
            "Status": "running",
            "Running": true,
            "Paused": false,
            "Restarting": false,
            "Pid": 4242,
            "ExitCode": 0,
            "StartedAt": "2024-05-01T12:00:00.123456789Z",
            "FinishedAt": "0001-01-01T00:00:00Z"
        }"#;
        let s: ContainerStateSnapshot = serde_json::from_str(json).unwrap();
        assert!(s.running);
        assert!(!s.paused);
        assert_eq!(
            s.started_at.as_deref(),
            Some("2024-05-01T12:00:00.123456789Z")
        );
        assert_eq!(s.finished_at.as_deref(), Some(DOCKER_TIMESTAMP_ZERO));
    }

    #[test]
    fn missing_fields_default() {
        let s: ContainerStateSnapshot = serde_json::from_str(r#"{"Running": false}"#).unwrap();
        assert_eq!(s, ContainerStateSnapshot::created());
    }

    #[test]
    fn null_timestamps_are_absent() {
        let s: ContainerStateSnapshot =
            serde_json::from_str(r#"{"Running": false, "StartedAt": null, "FinishedAt": null}"#)
                .unwrap();
        assert!(s.started_at.is_none());
        assert!(s.finished_at.is_none());
    }
}
