use crate::ContainerStateSnapshot;
use boxstate_time::{parse_timestamp, Timestamp, TimestampError};
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;
use tracing::{trace, warn};

/// Whether the container is running and has been up for at least
/// `minimum_duration` as of `now`.
///
/// Only `running` and `started_at` are consulted. A running container with no
/// start time, or one whose start lies after `now`, does not qualify. The
/// boundary is inclusive.
pub fn is_running(
    state: &ContainerStateSnapshot,
    minimum_duration: Duration,
    now: DateTime<Utc>,
) -> Result<bool, TimestampError> {
    let Some(elapsed) = running_for(state, now)? else {
        trace!("not running: running={}", state.running);
        return Ok(false);
    };

    if elapsed < TimeDelta::zero() {
        warn!(
            "container start time lies {}ms after reference instant",
            -elapsed.num_milliseconds()
        );
        return Ok(false);
    }

    // A minimum beyond TimeDelta's range can never be reached.
    let Ok(minimum) = TimeDelta::from_std(minimum_duration) else {
        return Ok(false);
    };

    let verdict = elapsed >= minimum;
    trace!(
        "running for {}ms (minimum {}ms): {verdict}",
        elapsed.num_milliseconds(),
        minimum.num_milliseconds()
    );
    Ok(verdict)
}

/// Whether the container ran and has since exited.
///
/// A container that was never started has no finish time and is not stopped.
/// `finished_at` is not parsed at all while `running` is set.
pub fn is_stopped(state: &ContainerStateSnapshot) -> Result<bool, TimestampError> {
    if state.running {
        return Ok(false);
    }
    let verdict = parse_timestamp(state.finished_at.as_deref())?.is_set();
    trace!("stopped: {verdict}");
    Ok(verdict)
}

/// Time elapsed since `started_at`, if the container is running and has one.
///
/// Negative when the reported start lies after `now`.
pub fn running_for(
    state: &ContainerStateSnapshot,
    now: DateTime<Utc>,
) -> Result<Option<TimeDelta>, TimestampError> {
    if !state.running {
        return Ok(None);
    }
    match parse_timestamp(state.started_at.as_deref())? {
        Timestamp::Unset => {
            warn!("runtime reports a running container without a start time");
            Ok(None)
        }
        Timestamp::At(started) => Ok(Some(now.signed_duration_since(started))),
    }
}
