//! Conversion from runtime inspect responses into snapshots.

use crate::{ContainerStateSnapshot, CoreError};
use serde_json::Value;

impl ContainerStateSnapshot {
    /// Build a snapshot from a container inspect document.
    ///
    /// Accepts the API response (an object with a `State` member), the CLI's
    /// array form (the first element is used), or a bare `State` object.
    pub fn from_inspect_json(input: &str) -> Result<Self, CoreError> {
        let parsed: Value = serde_json::from_str(input)?;
        let document = match parsed {
            Value::Array(items) => items.into_iter().next().ok_or(CoreError::MissingState)?,
            other => other,
        };

        let state = match document {
            Value::Object(mut fields) => match fields.remove("State") {
                Some(state) => state,
                None if fields.contains_key("Running") => Value::Object(fields),
                None => return Err(CoreError::MissingState),
            },
            other => other,
        };

        Ok(serde_json::from_value(state)?)
    }
}

#[cfg(feature = "bollard")]
impl From<bollard::models::ContainerState> for ContainerStateSnapshot {
    fn from(state: bollard::models::ContainerState) -> Self {
        Self {
            running: state.running.unwrap_or(false),
            paused: state.paused.unwrap_or(false),
            started_at: state.started_at,
            finished_at: state.finished_at,
        }
    }
}

#[cfg(feature = "bollard")]
impl From<bollard::models::ContainerInspectResponse> for ContainerStateSnapshot {
    fn from(response: bollard::models::ContainerInspectResponse) -> Self {
        response.state.map(Self::from).unwrap_or_default()
    }
}
