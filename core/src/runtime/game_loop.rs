//! Fixed timestep accumulation

use std::time::Duration;

use super::RuntimeConfig;

/// Add a clamped wall-clock delta and count the whole ticks now due
///
/// Due ticks are removed from the accumulator; the remainder carries over to
/// the next call.
pub(super) fn drain_ticks(
    config: &RuntimeConfig,
    tick_duration: Duration,
    accumulator: &mut Duration,
    delta: Duration,
) -> u32 {
    let delta = if delta > config.max_delta {
        tracing::trace!("Clamping delta {:?} to {:?}", delta, config.max_delta);
        config.max_delta
    } else {
        delta
    };
    *accumulator += delta;

    let mut ticks = 0u32;
    while *accumulator >= tick_duration {
        *accumulator -= tick_duration;
        ticks += 1;
    }
    ticks
}
