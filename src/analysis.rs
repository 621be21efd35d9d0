//! Analysis façades wiring predicates into the shared access engine

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::access::{Interval, derive_gaps, march_window};
use crate::error::PassError;
use crate::orbital::coordinates::Frame;
use crate::orbital::propagation::Propagator;
use crate::visibility::{GroundTarget, Reduction, VisibilityEvaluator};

/// Configuration for access analyses. One explicit struct instead of
/// scattered optional arguments; every field has a documented default.
#[derive(Debug, Clone)]
pub struct AccessOptions {
    /// Minimum elevation above a target's local horizon for the satellite
    /// to count as visible. Default: 10 degrees.
    pub min_elevation_deg: f64,
    /// How per-target visibilities combine into one predicate value.
    /// Default: [`Reduction::Any`] (visible if any target sees it).
    pub reduction: Reduction,
    /// Fixed sampling interval of the march. Accesses shorter than this
    /// can be missed entirely. Default: 60 seconds.
    pub step: Duration,
    /// Offset from the propagator epoch to the window start. Default: zero.
    pub start_offset: Duration,
}

impl Default for AccessOptions {
    fn default() -> Self {
        Self {
            min_elevation_deg: 10.0,
            reduction: Reduction::Any,
            step: Duration::seconds(60),
            start_offset: Duration::zero(),
        }
    }
}

/// Compute the ordered list of access windows during which the satellite is
/// visible from the ground targets.
///
/// The analysis window is `[epoch + start_offset, epoch + start_offset +
/// duration]`. The propagator emits states in `source_frame`; targets are
/// fixed in `target_frame`. Returned instants are absolute UTC.
pub fn compute_accesses(
    propagator: &mut dyn Propagator,
    targets: &[GroundTarget],
    duration: Duration,
    source_frame: Frame,
    target_frame: Frame,
    options: &AccessOptions,
) -> Result<Vec<Interval>, PassError> {
    let window_start = propagator.epoch() + options.start_offset;
    let window_end = window_start + duration;
    debug!(
        targets = targets.len(),
        start = %window_start,
        end = %window_end,
        min_elevation_deg = options.min_elevation_deg,
        "computing accesses"
    );

    let mut evaluator = VisibilityEvaluator::new(
        targets,
        options.min_elevation_deg,
        options.reduction.clone(),
        source_frame,
        target_frame,
    )?;

    march_window(
        |t: DateTime<Utc>| evaluator.evaluate(propagator, t),
        window_start,
        window_end,
        options.step,
    )
}

/// Complement of [`compute_accesses`] within the analysis window: the
/// ordered list of spans with no visibility. Accesses and gaps together
/// exactly tile the window.
pub fn compute_gaps(
    propagator: &mut dyn Propagator,
    targets: &[GroundTarget],
    duration: Duration,
    source_frame: Frame,
    target_frame: Frame,
    options: &AccessOptions,
) -> Result<Vec<Interval>, PassError> {
    let window_start = propagator.epoch() + options.start_offset;
    let window_end = window_start + duration;
    let accesses = compute_accesses(
        propagator,
        targets,
        duration,
        source_frame,
        target_frame,
        options,
    )?;
    Ok(derive_gaps(window_start, window_end, &accesses))
}
