//! Low-precision solar ephemeris
//!
//! Accurate to roughly 0.01 degree over the current era, which is far below
//! the angular size of the Sun itself and more than enough for eclipse and
//! beta-angle work.

use chrono::{DateTime, Utc};
use glam::DVec3;

use crate::orbital::coordinates::julian_date_utc;

/// Astronomical unit, km.
pub const AU_KM: f64 = 149_597_870.7;

/// Solar radius, km.
pub const SUN_RADIUS_KM: f64 = 696_000.0;

/// Geocentric Sun position in ECI (TEME-adjacent equatorial frame), km.
///
/// Low-precision series from Meeus chapter 25: mean longitude and anomaly,
/// equation of center, obliquity of the ecliptic.
pub fn sun_position_eci_km(t: DateTime<Utc>) -> DVec3 {
    let n = julian_date_utc(t) - 2451545.0; // days from J2000.0

    // Mean longitude and mean anomaly of the Sun, degrees
    let l = (280.460 + 0.9856474 * n).rem_euclid(360.0);
    let g = (357.528 + 0.9856003 * n).rem_euclid(360.0).to_radians();

    // Ecliptic longitude with the equation of center
    let lambda = (l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();

    // Sun-Earth distance in AU
    let r_au = 1.00014 - 0.01671 * g.cos() - 0.00014 * (2.0 * g).cos();

    // Obliquity of the ecliptic
    let eps = (23.439 - 3.6e-7 * n).to_radians();

    let (sin_lambda, cos_lambda) = lambda.sin_cos();
    let (sin_eps, cos_eps) = eps.sin_cos();

    DVec3::new(
        cos_lambda,
        cos_eps * sin_lambda,
        sin_eps * sin_lambda,
    ) * (r_au * AU_KM)
}
