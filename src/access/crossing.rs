//! Bisection refinement of predicate crossings

use chrono::{DateTime, Duration, Utc};

use crate::error::PassError;

/// Absolute time tolerance of a refined crossing: 1 millisecond.
pub const CROSSING_TOLERANCE_MS: i64 = 1;

/// Hard cap on bisection iterations. The bracket halves from the default
/// 60 s step to under 1 ms in ~26 iterations; 64 covers any sane step.
const MAX_BISECTIONS: u32 = 64;

/// Locate the instant where a boolean function of time changes value.
///
/// `t0 < t1` must bracket exactly one detected sign change, with the known
/// values `v0` at `t0` and `v1` at `t1` disagreeing. The bracket is halved
/// repeatedly, keeping the half whose endpoints still disagree, until its
/// width falls below [`CROSSING_TOLERANCE_MS`].
///
/// Calling this with `v0 == v1` is a programming-contract violation and
/// panics; callers must only invoke it across a detected sign change.
/// Errors from `f` (e.g. propagation failures) abort refinement.
pub fn refine_crossing<F>(
    mut f: F,
    mut t0: DateTime<Utc>,
    v0: bool,
    mut t1: DateTime<Utc>,
    v1: bool,
) -> Result<DateTime<Utc>, PassError>
where
    F: FnMut(DateTime<Utc>) -> Result<bool, PassError>,
{
    assert!(t0 < t1, "crossing bracket must be ordered: {t0} >= {t1}");
    assert!(
        v0 != v1,
        "crossing bracket endpoints must disagree (both {v0} at {t0}..{t1})"
    );

    let tolerance = Duration::milliseconds(CROSSING_TOLERANCE_MS);

    for _ in 0..MAX_BISECTIONS {
        if t1 - t0 <= tolerance {
            break;
        }
        let mid = t0 + (t1 - t0) / 2;
        if mid <= t0 || mid >= t1 {
            // Bracket no longer representable at timestamp resolution
            break;
        }
        // The kept half always has value v0 at its left endpoint, so the
        // disagreement invariant is preserved without tracking extra state.
        if f(mid)? == v0 {
            t0 = mid;
        } else {
            t1 = mid;
        }
    }

    Ok(t0 + (t1 - t0) / 2)
}
