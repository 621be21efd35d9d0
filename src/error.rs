//! Error types for access analysis

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by access/gap analyses.
///
/// A failed predicate evaluation invalidates the remainder of the march, so
/// any of these aborts the whole analysis call; no partial access list is
/// ever returned.
#[derive(Debug, Error)]
pub enum PassError {
    /// The orbit propagator failed at the requested instant (e.g. the time
    /// is outside the model's validity range). Propagated to the caller
    /// unchanged.
    #[error("propagation failed at {t}: {reason}")]
    Propagation { t: DateTime<Utc>, reason: String },

    /// A formula evaluator received an argument outside its numeric domain
    /// (e.g. an inverse-trigonometric input beyond [-1, 1]).
    #[error("{op} received {value} outside its numeric domain")]
    NumericDomain { op: &'static str, value: f64 },

    /// The analysis window or sampling step is not strictly positive.
    #[error("invalid analysis window: {reason}")]
    InvalidWindow { reason: String },

    /// Geodetic coordinates outside the valid latitude/longitude ranges.
    #[error("invalid coordinates: latitude {latitude_deg} deg, longitude {longitude_deg} deg")]
    InvalidCoordinates {
        latitude_deg: f64,
        longitude_deg: f64,
    },

    /// TLE lines could not be parsed into an SGP4 model.
    #[error("invalid TLE: {reason}")]
    Tle { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_error_display() {
        let err = PassError::Propagation {
            t: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            reason: "deep space epsilon".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("propagation failed"));
        assert!(msg.contains("deep space epsilon"));

        let err = PassError::NumericDomain {
            op: "acos",
            value: 1.5,
        };
        assert!(format!("{}", err).contains("acos"));
    }
}
