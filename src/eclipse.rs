//! Earth shadow geometry and eclipse windows

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use glam::DVec3;

use crate::access::{Interval, derive_gaps, march_window};
use crate::analysis::AccessOptions;
use crate::error::PassError;
use crate::orbital::coordinates::{WGS84_A_KM, checked_asin};
use crate::orbital::propagation::Propagator;
use crate::orbital::sun::{SUN_RADIUS_KM, sun_position_eci_km};

/// Illumination state of a satellite with respect to the Earth's shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShadowState {
    Sunlit,
    Penumbra,
    Umbra,
}

/// Which shadow depth counts as "in eclipse" for window detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EclipseKind {
    /// Umbra only: the Sun's disk is fully occluded.
    Umbra,
    /// Penumbra or deeper: any part of the Sun's disk is occluded.
    Penumbra,
}

/// Classify a satellite position against the conical Earth shadow.
///
/// Standard dual-cone model (Vallado's shadow algorithm): the satellite is
/// projected onto the anti-Sun axis and compared against the penumbral and
/// umbral cone cross-sections at that depth. Positions are ECI kilometers.
pub fn shadow_state(sat_eci_km: DVec3, sun_eci_km: DVec3) -> Result<ShadowState, PassError> {
    let sun_dist = sun_eci_km.length();
    let sun_hat = sun_eci_km / sun_dist;

    // Sun side of the terminator plane: always lit
    if sat_eci_km.dot(sun_hat) >= 0.0 {
        return Ok(ShadowState::Sunlit);
    }

    let alpha_pen = checked_asin("penumbra half-angle", (SUN_RADIUS_KM + WGS84_A_KM) / sun_dist)?;
    let alpha_umb = checked_asin("umbra half-angle", (SUN_RADIUS_KM - WGS84_A_KM) / sun_dist)?;

    // Decompose the satellite position along and across the anti-Sun axis
    let axial = sat_eci_km.dot(-sun_hat);
    let cross = (sat_eci_km - (-sun_hat) * axial).length();

    let pen_apex_dist = WGS84_A_KM / alpha_pen.sin();
    let pen_radius = alpha_pen.tan() * (pen_apex_dist + axial);
    if cross <= pen_radius {
        let umb_apex_dist = WGS84_A_KM / alpha_umb.sin();
        let umb_radius = alpha_umb.tan() * (umb_apex_dist - axial);
        if cross <= umb_radius {
            return Ok(ShadowState::Umbra);
        }
        return Ok(ShadowState::Penumbra);
    }
    Ok(ShadowState::Sunlit)
}

/// Windows during which the satellite is in the Earth's shadow at least as
/// deep as `kind`. Only the `step` and `start_offset` options apply.
pub fn eclipse_windows(
    propagator: &mut dyn Propagator,
    duration: Duration,
    kind: EclipseKind,
    options: &AccessOptions,
) -> Result<Vec<Interval>, PassError> {
    let window_start = propagator.epoch() + options.start_offset;
    let window_end = window_start + duration;

    let predicate = |t: DateTime<Utc>| {
        let state = propagator.propagate_to(t)?;
        let sun = sun_position_eci_km(t);
        let shadow = shadow_state(state.position_km, sun)?;
        Ok(match kind {
            EclipseKind::Umbra => shadow == ShadowState::Umbra,
            EclipseKind::Penumbra => shadow >= ShadowState::Penumbra,
        })
    };

    march_window(predicate, window_start, window_end, options.step)
}

/// Complement of [`eclipse_windows`]: spans where the satellite is sunlit
/// (shallower than `kind`).
pub fn sunlit_windows(
    propagator: &mut dyn Propagator,
    duration: Duration,
    kind: EclipseKind,
    options: &AccessOptions,
) -> Result<Vec<Interval>, PassError> {
    let window_start = propagator.epoch() + options.start_offset;
    let window_end = window_start + duration;
    let eclipses = eclipse_windows(propagator, duration, kind, options)?;
    Ok(derive_gaps(window_start, window_end, &eclipses))
}
