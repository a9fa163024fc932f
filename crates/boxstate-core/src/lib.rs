//! Lifecycle classification for container runtime state snapshots.
//!
//! A [`ContainerStateSnapshot`] is one read of the runtime's `State` fields. The
//! classifier answers two questions about it: has the container been running for
//! at least a minimum duration (`is_running`), and has it exited (`is_stopped`).
//! Every decision is a pure function of the snapshot and a caller-supplied
//! reference instant; nothing here reads a clock or keeps state between calls.
//!
//! The crate also derives a coarse [`ContainerPhase`], carries the
//! [`ReadinessPolicy`] configuration, and converts runtime inspect documents into
//! snapshots.

pub mod classify;
pub mod inspect;
pub mod phase;
pub mod policy;
pub mod snapshot;

pub use boxstate_time::{
    format_timestamp, parse_timestamp, Timestamp, TimestampError, DOCKER_TIMESTAMP_ZERO,
};
pub use classify::{is_running, is_stopped, running_for};
pub use phase::{phase, ContainerPhase};
pub use policy::ReadinessPolicy;
pub use snapshot::ContainerStateSnapshot;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("inspect document error: {0}")]
    Inspect(#[from] serde_json::Error),
    #[error("inspect document has no container state")]
    MissingState,
    #[error("readiness policy error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
