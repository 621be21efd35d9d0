//! Satellite access window analysis.
//!
//! Determines the time windows ("accesses") during which a boolean physical
//! condition holds along a satellite trajectory — ground-station visibility,
//! eclipse state, a beta-angle threshold — and the complementary windows
//! ("gaps"). A shared engine samples the condition at a fixed step across
//! the analysis window, refines each detected change of value by bisection
//! to millisecond precision, and assembles an ordered, gapless partition of
//! the window.
//!
//! ```no_run
//! use chrono::Duration;
//! use satpass::{AccessOptions, Frame, GroundTarget, Sgp4Propagator, compute_accesses};
//!
//! # fn main() -> Result<(), satpass::PassError> {
//! let mut iss = Sgp4Propagator::from_tle(
//!     Some("ISS (ZARYA)".to_string()),
//!     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
//!     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
//! )?;
//! let svalbard = GroundTarget::new("Svalbard", 78.23, 15.39, 450.0);
//!
//! let passes = compute_accesses(
//!     &mut iss,
//!     &[svalbard],
//!     Duration::days(1),
//!     Frame::Teme,
//!     Frame::Ecef,
//!     &AccessOptions::default(),
//! )?;
//! for pass in &passes {
//!     println!("{} -> {}", pass.start, pass.end);
//! }
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod analysis;
pub mod beta;
pub mod eclipse;
pub mod error;
pub mod orbital;
pub mod tle;
pub mod visibility;

pub use access::{CROSSING_TOLERANCE_MS, Interval, derive_gaps, march_window, refine_crossing};
pub use analysis::{AccessOptions, compute_accesses, compute_gaps};
pub use beta::{beta_angle_deg, beta_angle_windows};
pub use eclipse::{EclipseKind, ShadowState, eclipse_windows, shadow_state, sunlit_windows};
pub use error::PassError;
pub use orbital::{Frame, Propagator, Sgp4Propagator, StateVector};
pub use visibility::{GroundTarget, Reduction, VisibilityEvaluator};
