//! Beta angle computation and threshold crossings
//!
//! The beta angle is the angle between the orbital plane and the Sun
//! vector. It governs eclipse fraction and thermal loading, and mission
//! rules are usually phrased as threshold crossings ("beta above 70
//! degrees"), which maps directly onto the shared access engine.

use chrono::{DateTime, Duration, Utc};
use glam::DVec3;

use crate::access::{Interval, march_window};
use crate::analysis::AccessOptions;
use crate::error::PassError;
use crate::orbital::coordinates::checked_asin;
use crate::orbital::propagation::{Propagator, StateVector};
use crate::orbital::sun::sun_position_eci_km;

/// Signed beta angle in degrees from an instantaneous orbital state.
///
/// The orbit normal is `r x v`; beta is positive when the Sun lies on the
/// same side of the orbital plane as the normal. A degenerate state with
/// parallel position and velocity has no defined orbital plane and is
/// surfaced as an invalid-input failure.
pub fn beta_angle_deg(state: &StateVector, sun_eci_km: DVec3) -> Result<f64, PassError> {
    let normal = state.position_km.cross(state.velocity_km_s);
    let normal_len = normal.length();
    if normal_len == 0.0 {
        return Err(PassError::NumericDomain {
            op: "beta angle (degenerate orbit normal)",
            value: 0.0,
        });
    }
    let sin_beta = normal.dot(sun_eci_km) / (normal_len * sun_eci_km.length());
    Ok(checked_asin("beta angle", sin_beta)?.to_degrees())
}

/// Windows during which the signed beta angle is above (or below) a fixed
/// threshold. Only the `step` and `start_offset` options apply; beta moves
/// over days, so steps much larger than the visibility default are normal.
pub fn beta_angle_windows(
    propagator: &mut dyn Propagator,
    duration: Duration,
    threshold_deg: f64,
    above: bool,
    options: &AccessOptions,
) -> Result<Vec<Interval>, PassError> {
    let window_start = propagator.epoch() + options.start_offset;
    let window_end = window_start + duration;

    let predicate = |t: DateTime<Utc>| {
        let state = propagator.propagate_to(t)?;
        let beta = beta_angle_deg(&state, sun_position_eci_km(t))?;
        Ok(if above {
            beta >= threshold_deg
        } else {
            beta < threshold_deg
        })
    };

    march_window(predicate, window_start, window_end, options.step)
}
