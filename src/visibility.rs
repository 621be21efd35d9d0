//! Ground-target visibility predicate
//!
//! One evaluator serves both single ground stations and multi-site ground
//! facilities: every target contributes one boolean to a reusable
//! visibility vector, which a reduction collapses into the scalar value the
//! access engine consumes.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::PassError;
use crate::orbital::coordinates::{Frame, elevation_deg, frame_rotation, geodetic_to_ecef_km, geodetic_up};
use crate::orbital::propagation::Propagator;

/// A ground station or facility site in WGS-84 geodetic coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTarget {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl GroundTarget {
    pub fn new(
        name: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// ECEF position of the site in kilometers.
    pub fn position_ecef_km(&self) -> Result<DVec3, PassError> {
        geodetic_to_ecef_km(self.latitude_deg, self.longitude_deg, self.altitude_m)
    }
}

/// Combines the per-target booleans of one sampling step into the scalar
/// predicate value consumed by the access engine.
#[derive(Clone)]
pub enum Reduction {
    /// Visible if any target sees the satellite (logical OR, the default).
    Any,
    /// Visible only if every target sees the satellite (logical AND),
    /// modeling simultaneous multi-station requirements.
    All,
    /// Caller-supplied combining function, e.g. weighted or k-of-n schemes.
    Custom(Arc<dyn Fn(&[bool]) -> bool + Send + Sync>),
}

impl Reduction {
    pub fn apply(&self, flags: &[bool]) -> bool {
        match self {
            Reduction::Any => flags.iter().any(|&v| v),
            Reduction::All => flags.iter().all(|&v| v),
            Reduction::Custom(f) => f(flags),
        }
    }
}

impl Default for Reduction {
    fn default() -> Self {
        Reduction::Any
    }
}

impl fmt::Debug for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Any => f.write_str("Any"),
            Reduction::All => f.write_str("All"),
            Reduction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Per-sample visibility test across a fixed set of ground targets.
///
/// Site positions and up-directions are resolved once at construction; the
/// per-target boolean buffer is overwritten in place on every evaluation
/// and fully consumed by the reduction before the next step, so no
/// reference into it survives across samples.
pub struct VisibilityEvaluator {
    sites: Vec<(DVec3, DVec3)>, // (ECEF position km, geodetic up)
    visibility: Vec<bool>,
    min_elevation_deg: f64,
    reduction: Reduction,
    source_frame: Frame,
    target_frame: Frame,
}

impl VisibilityEvaluator {
    pub fn new(
        targets: &[GroundTarget],
        min_elevation_deg: f64,
        reduction: Reduction,
        source_frame: Frame,
        target_frame: Frame,
    ) -> Result<Self, PassError> {
        let sites = targets
            .iter()
            .map(|t| {
                Ok((
                    t.position_ecef_km()?,
                    geodetic_up(t.latitude_deg, t.longitude_deg),
                ))
            })
            .collect::<Result<Vec<_>, PassError>>()?;
        Ok(Self {
            visibility: vec![false; sites.len()],
            sites,
            min_elevation_deg,
            reduction,
            source_frame,
            target_frame,
        })
    }

    /// Evaluate the reduced visibility predicate at one instant.
    pub fn evaluate(
        &mut self,
        propagator: &mut dyn Propagator,
        t: DateTime<Utc>,
    ) -> Result<bool, PassError> {
        let state = propagator.propagate_to(t)?;
        let rotation = frame_rotation(self.source_frame, self.target_frame, t);
        let sat_fixed = rotation * state.position_km;

        for (i, (site, up)) in self.sites.iter().enumerate() {
            let elevation = elevation_deg(*site, *up, sat_fixed)?;
            self.visibility[i] = elevation >= self.min_elevation_deg;
        }
        Ok(self.reduction.apply(&self.visibility))
    }
}
