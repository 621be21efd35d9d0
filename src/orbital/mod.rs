//! Orbital mechanics module
//!
//! This module handles the external collaborators of the access engine:
//! orbit propagation, coordinate/frame transformations, and the solar
//! ephemeris consumed by the eclipse and beta-angle predicates.

pub mod coordinates;
pub mod propagation;
pub mod sun;

pub use coordinates::{
    Frame, WGS84_A_KM, eci_to_ecef_km, elevation_deg, frame_rotation, geodetic_to_ecef_km,
    geodetic_up, gmst_rad, julian_date_utc,
};
pub use propagation::{Propagator, Sgp4Propagator, StateVector, minutes_since_epoch};
pub use sun::{AU_KM, SUN_RADIUS_KM, sun_position_eci_km};
