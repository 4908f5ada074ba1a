//! Loop bounds derived from a signed count converted to an unsigned index
//!
//! Iterating `0..count - 1` with an unsigned index wraps when the count is 0:
//! `-1` becomes `usize::MAX` and the loop runs practically forever. Runs here
//! are always capped so the wrapped bound can be observed safely.

use tracing::{debug, warn};

/// Upper limit on iterations of any run, whatever cap is requested
pub const MAX_CAP: usize = 1 << 20;

/// Bound produced by converting `count - 1` to `usize` without a range check
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn wrapped_bound(count: i32) -> usize {
    count.wrapping_sub(1) as isize as usize
}

/// Bound with the conversion checked: counts of 0 or 1 (and negative counts)
/// give an empty loop
#[must_use]
pub fn checked_bound(count: i32) -> usize {
    usize::try_from(count).map_or(0, |count| count.saturating_sub(1))
}

/// Result of iterating `0..bound`, stopped after at most `cap` iterations
#[derive(Debug, Clone, PartialEq)]
pub struct LaneRun {
    pub bound: usize,
    pub iterations: usize,
    pub sum: f32,
    pub truncated: bool,
}

/// Iterate `0..bound`, summing the indices, stopping after `cap` iterations.
/// `cap` itself is clamped to [`MAX_CAP`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn run_lanes(bound: usize, cap: usize) -> LaneRun {
    let cap = cap.min(MAX_CAP);
    let iterations = bound.min(cap);
    let truncated = bound > cap;
    if truncated {
        warn!(bound, cap, "loop bound exceeds cap, stopping early");
    }

    let mut sum = 0.0f32;
    for i in 0..iterations {
        sum += i as f32;
    }
    debug!(bound, iterations, sum, "lane loop finished");

    LaneRun {
        bound,
        iterations,
        sum,
        truncated,
    }
}
