//! Coordinate transformation utilities for orbital mechanics

use chrono::{DateTime, Datelike, Timelike, Utc};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::PassError;

/// WGS-84 semi-major axis, km.
pub const WGS84_A_KM: f64 = 6378.137;

/// WGS-84 first eccentricity squared.
pub const WGS84_E2: f64 = 0.00669437999014;

/// Reference frames understood by the analyses.
///
/// TEME is the frame SGP4 states come out in; ECEF is the Earth-fixed frame
/// ground targets live in. The rotation between them is GMST-only, which is
/// the same approximation the propagation stack itself carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// True Equator Mean Equinox (the SGP4 output frame, treated as ECI).
    Teme,
    /// Earth-centered Earth-fixed (ITRF-like, GMST rotation only).
    Ecef,
}

/// Compute the Julian Date (UTC) for a given timestamp.
/// Uses the standard Gregorian calendar to JD conversion.
pub fn julian_date_utc(t: DateTime<Utc>) -> f64 {
    let mut y = t.year();
    let mut m = t.month() as i32;
    let d = t.day() as i32;

    // Convert time of day to fraction of day
    let hour = t.hour() as f64;
    let minute = t.minute() as f64;
    let sec = t.second() as f64 + (t.nanosecond() as f64) * 1e-9_f64;
    let day_fraction = (hour + (minute + sec / 60.0) / 60.0) / 24.0;

    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd0 = (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * ((m + 1) as f64)).floor()
        + d as f64
        + b
        - 1524.5;

    jd0 + day_fraction
}

/// Greenwich Mean Sidereal Time (radians) using IAU 1982/2006 polynomial.
/// Assumes UT1 ~= UTC, which is well within the GMST-only frame model here.
pub fn gmst_rad(t: DateTime<Utc>) -> f64 {
    let jd = julian_date_utc(t);
    let t_cent = (jd - 2451545.0) / 36525.0; // Julian centuries from J2000.0

    // GMST in seconds (IAU 1982 with update terms). See Vallado and IERS Conventions.
    let gmst_sec =
        67310.54841 + (876600.0 * 3600.0 + 8640184.812866) * t_cent + 0.093104 * t_cent * t_cent
            - 6.2e-6 * t_cent * t_cent * t_cent;

    // Normalize to [0, 86400)
    let sec_in_day = 86400.0_f64;
    let mut s = gmst_sec % sec_in_day;
    if s < 0.0 {
        s += sec_in_day;
    }

    s * (std::f64::consts::TAU / sec_in_day)
}

/// Rotate ECI (TEME) -> ECEF using simple GMST rotation about Z.
/// Standard transformation rotates by -GMST (clockwise when viewed from +Z)
pub fn eci_to_ecef_km(eci: DVec3, gmst: f64) -> DVec3 {
    let (s, c) = gmst.sin_cos();
    let x = c * eci.x + s * eci.y;
    let y = -s * eci.x + c * eci.y;
    DVec3::new(x, y, eci.z)
}

/// Rotation matrix taking vectors from `source` to `target` at instant `t`.
/// Applied to both position and velocity of a propagated state.
pub fn frame_rotation(source: Frame, target: Frame, t: DateTime<Utc>) -> DMat3 {
    match (source, target) {
        (Frame::Teme, Frame::Ecef) => DMat3::from_rotation_z(-gmst_rad(t)),
        (Frame::Ecef, Frame::Teme) => DMat3::from_rotation_z(gmst_rad(t)),
        _ => DMat3::IDENTITY,
    }
}

/// Convert WGS-84 geodetic coordinates to an ECEF position in kilometers.
pub fn geodetic_to_ecef_km(
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
) -> Result<DVec3, PassError> {
    if !(-90.0..=90.0).contains(&latitude_deg) || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(PassError::InvalidCoordinates {
            latitude_deg,
            longitude_deg,
        });
    }

    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    let n = WGS84_A_KM / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let alt_km = altitude_m / 1000.0;

    Ok(DVec3::new(
        (n + alt_km) * cos_lat * cos_lon,
        (n + alt_km) * cos_lat * sin_lon,
        (n * (1.0 - WGS84_E2) + alt_km) * sin_lat,
    ))
}

/// Geodetic up direction (surface normal) at a WGS-84 site.
pub fn geodetic_up(latitude_deg: f64, longitude_deg: f64) -> DVec3 {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Elevation angle (degrees) of a satellite above a site's local horizon.
///
/// Both positions are ECEF kilometers. Negative elevations mean the
/// satellite is below the horizon.
pub fn elevation_deg(site_ecef_km: DVec3, up: DVec3, sat_ecef_km: DVec3) -> Result<f64, PassError> {
    let to_sat = sat_ecef_km - site_ecef_km;
    let range = to_sat.length();
    if range == 0.0 {
        // Site and satellite at the same point: elevation is undefined
        return Err(PassError::NumericDomain {
            op: "elevation (zero range)",
            value: 0.0,
        });
    }
    let sin_el = up.dot(to_sat) / range;
    Ok(checked_asin("elevation", sin_el)?.to_degrees())
}

/// `asin` that tolerates floating-point slop just outside [-1, 1] but
/// surfaces genuinely out-of-range inputs as an invalid-input failure.
pub fn checked_asin(op: &'static str, value: f64) -> Result<f64, PassError> {
    if value.is_nan() || value.abs() > 1.0 + 1e-9 {
        return Err(PassError::NumericDomain { op, value });
    }
    Ok(value.clamp(-1.0, 1.0).asin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_julian_date_j2000() {
        // J2000.0 epoch: 2000-01-01 12:00 UTC = JD 2451545.0
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_date_utc(t) - 2451545.0).abs() < 1e-6);
    }

    #[test]
    fn test_gmst_range() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
        let gmst = gmst_rad(t);
        assert!(gmst >= 0.0);
        assert!(gmst < std::f64::consts::TAU);
    }

    #[test]
    fn test_eci_to_ecef_km() {
        let eci = DVec3::new(1000.0, 0.0, 0.0);
        let ecef = eci_to_ecef_km(eci, 0.0);

        // With no rotation, should be the same
        assert!((ecef.x - 1000.0).abs() < 1e-10);
        assert!(ecef.y.abs() < 1e-10);
        assert!(ecef.z.abs() < 1e-10);

        // With 90 degree rotation, X maps onto -Y
        let ecef_90 = eci_to_ecef_km(eci, std::f64::consts::FRAC_PI_2);
        assert!(ecef_90.x.abs() < 1e-10);
        assert!((ecef_90.y + 1000.0).abs() < 1e-10);
        assert!(ecef_90.z.abs() < 1e-10);
    }

    #[test]
    fn test_frame_rotation_matches_gmst_helper() {
        let t = Utc.with_ymd_and_hms(2024, 6, 15, 3, 30, 0).unwrap();
        let eci = DVec3::new(6800.0, 1200.0, -300.0);

        let via_matrix = frame_rotation(Frame::Teme, Frame::Ecef, t) * eci;
        let via_helper = eci_to_ecef_km(eci, gmst_rad(t));
        assert!((via_matrix - via_helper).length() < 1e-9);

        // Round trip back to TEME
        let back = frame_rotation(Frame::Ecef, Frame::Teme, t) * via_matrix;
        assert!((back - eci).length() < 1e-9);
    }

    #[test]
    fn test_frame_rotation_identity_for_same_frame() {
        let t = Utc.with_ymd_and_hms(2024, 6, 15, 3, 30, 0).unwrap();
        assert_eq!(frame_rotation(Frame::Teme, Frame::Teme, t), DMat3::IDENTITY);
        assert_eq!(frame_rotation(Frame::Ecef, Frame::Ecef, t), DMat3::IDENTITY);
    }

    #[test]
    fn test_geodetic_to_ecef_equator_prime_meridian() {
        let p = geodetic_to_ecef_km(0.0, 0.0, 0.0).unwrap();
        assert!((p.x - WGS84_A_KM).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!(p.z.abs() < 1e-9);
    }

    #[test]
    fn test_geodetic_to_ecef_north_pole() {
        let p = geodetic_to_ecef_km(90.0, 0.0, 0.0).unwrap();
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        // Polar radius is ~6356.75 km, noticeably shorter than equatorial
        assert!((p.z - 6356.752).abs() < 0.01);
    }

    #[test]
    fn test_geodetic_to_ecef_rejects_bad_coordinates() {
        assert!(geodetic_to_ecef_km(91.0, 0.0, 0.0).is_err());
        assert!(geodetic_to_ecef_km(-91.0, 0.0, 0.0).is_err());
        assert!(geodetic_to_ecef_km(0.0, 181.0, 0.0).is_err());
        assert!(geodetic_to_ecef_km(0.0, -181.0, 0.0).is_err());
    }

    #[test]
    fn test_elevation_overhead_and_horizon() {
        let site = geodetic_to_ecef_km(0.0, 0.0, 0.0).unwrap();
        let up = geodetic_up(0.0, 0.0);

        // Directly overhead: ~90 degrees
        let sat = site + up * 500.0;
        let el = elevation_deg(site, up, sat).unwrap();
        assert!((el - 90.0).abs() < 1e-6, "overhead elevation was {el}");

        // On the horizon plane: ~0 degrees
        let tangent = DVec3::new(0.0, 1.0, 0.0);
        let sat = site + tangent * 1000.0;
        let el = elevation_deg(site, up, sat).unwrap();
        assert!(el.abs() < 1e-6, "horizon elevation was {el}");

        // Opposite side of Earth: well below the horizon
        let sat = -site * 1.2;
        let el = elevation_deg(site, up, sat).unwrap();
        assert!(el < -45.0, "antipodal elevation was {el}");
    }

    #[test]
    fn test_checked_asin_domain() {
        assert!(checked_asin("test", 0.5).is_ok());
        // A hair over 1.0 from floating-point noise is clamped
        assert!(
            (checked_asin("test", 1.0 + 1e-12).unwrap() - std::f64::consts::FRAC_PI_2).abs()
                < 1e-9
        );
        // Genuinely out of range is an invalid-input failure
        assert!(matches!(
            checked_asin("test", 1.5),
            Err(PassError::NumericDomain { .. })
        ));
        assert!(checked_asin("test", f64::NAN).is_err());
    }
}
