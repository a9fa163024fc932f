//! Timestamp normalization for container runtime state.
//!
//! Container runtimes report lifecycle timestamps as loosely specified strings:
//! UTC with a `Z` suffix, an explicit numeric offset, or a fixed zero sentinel
//! (`DOCKER_TIMESTAMP_ZERO`) meaning "never set". This crate turns those strings
//! into a [`Timestamp`], which is either `Unset` or an instant normalized to UTC.

pub mod timestamp;

pub use timestamp::{
    format_timestamp, is_timestamp_set, parse_timestamp, Timestamp, DOCKER_TIMESTAMP_ZERO,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("malformed timestamp '{raw}': {source}")]
    Malformed {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}
