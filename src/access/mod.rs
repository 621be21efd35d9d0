//! Generic interval-detection and crossing-refinement engine
//!
//! This is the shared core behind every analysis in the crate: a boolean
//! predicate of time is sampled at a fixed step across a bounded window,
//! value changes are refined by bisection, and the results are assembled
//! into an ordered, gapless partition of the window into accesses and gaps.

pub mod crossing;
pub mod interval;
pub mod march;

pub use crossing::{CROSSING_TOLERANCE_MS, refine_crossing};
pub use interval::{Interval, derive_gaps};
pub use march::march_window;
