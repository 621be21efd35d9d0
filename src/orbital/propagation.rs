//! Orbit propagation collaborators
//!
//! The analyses in this crate never propagate orbits themselves; they drive
//! a [`Propagator`] supplied by the caller. The trait models a stateful
//! object whose internal state is advanced as a side effect of each
//! evaluation, which is why analyses hold it by `&mut` and promise to
//! request times in non-decreasing order during a march (crossing
//! refinement re-samples only inside an already-visited step).

use chrono::{DateTime, Utc};
use glam::DVec3;

use crate::error::PassError;
use crate::tle::parse_tle_epoch_to_utc;

/// Position and velocity of the satellite at one instant, in the
/// propagator's native frame (TEME for SGP4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position_km: DVec3,
    pub velocity_km_s: DVec3,
}

/// A stateful orbit model advanced to a requested time.
///
/// Implementations may mutate internal state on every call; two analyses
/// must never share one instance. Requesting a time outside the model's
/// validity range is reported as [`PassError::Propagation`] and aborts the
/// calling analysis.
pub trait Propagator {
    /// Reference epoch of the underlying orbit model.
    fn epoch(&self) -> DateTime<Utc>;

    /// Advance to `t` and return the state there.
    fn propagate_to(&mut self, t: DateTime<Utc>) -> Result<StateVector, PassError>;
}

/// Calculate minutes since epoch for SGP4 propagation
pub fn minutes_since_epoch(sim_utc: DateTime<Utc>, epoch: DateTime<Utc>) -> f64 {
    let delta = sim_utc - epoch;
    delta.num_seconds() as f64 / 60.0 + (delta.subsec_nanos() as f64) / 60.0 / 1.0e9
}

/// SGP4-backed propagator built from a two-line element set.
pub struct Sgp4Propagator {
    name: Option<String>,
    epoch_utc: DateTime<Utc>,
    constants: sgp4::Constants,
}

impl Sgp4Propagator {
    /// Build the SGP4 model: parse TLE -> Elements -> Constants.
    pub fn from_tle(name: Option<String>, line1: &str, line2: &str) -> Result<Self, PassError> {
        let epoch_utc = parse_tle_epoch_to_utc(line1).ok_or_else(|| PassError::Tle {
            reason: "could not parse epoch from line 1".to_string(),
        })?;
        let elements = sgp4::Elements::from_tle(name.clone(), line1.as_bytes(), line2.as_bytes())
            .map_err(|e| PassError::Tle {
            reason: e.to_string(),
        })?;
        let constants = sgp4::Constants::from_elements(&elements).map_err(|e| PassError::Tle {
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            epoch_utc,
            constants,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Propagator for Sgp4Propagator {
    fn epoch(&self) -> DateTime<Utc> {
        self.epoch_utc
    }

    fn propagate_to(&mut self, t: DateTime<Utc>) -> Result<StateVector, PassError> {
        let mins = minutes_since_epoch(t, self.epoch_utc);
        let state = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(mins))
            .map_err(|e| PassError::Propagation {
                t,
                reason: e.to_string(),
            })?;
        Ok(StateVector {
            position_km: DVec3::from_array(state.position),
            velocity_km_s: DVec3::from_array(state.velocity),
        })
    }
}
