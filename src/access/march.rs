//! Fixed-step predicate marching and access assembly

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use crate::access::crossing::refine_crossing;
use crate::access::interval::Interval;
use crate::error::PassError;

/// Transient state of the march over one analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarchState {
    /// No sample evaluated yet.
    Initial,
    /// Inside an access that started at the carried instant.
    Visible { access_start: DateTime<Utc> },
    /// Outside any access.
    NotVisible,
}

/// March a boolean predicate across `[window_start, window_end]` at a fixed
/// step and return the ordered list of maximal true-intervals.
///
/// Samples are taken at `window_start, window_start + step, ...`, with the
/// final partial step clamped to `window_end`. Each detected value change is
/// refined to the crossing tolerance by bisection inside the single step
/// that bracketed it, so the returned accesses are strictly increasing and
/// non-overlapping by construction. Window boundaries are exact and never
/// refined.
///
/// March samples are issued in strictly increasing time order. Refinement
/// re-samples inside the one step that bracketed a change, so the predicate
/// must tolerate evaluation anywhere within the most recent step.
///
/// An access shorter than `step` can fall entirely between two samples and
/// go undetected. That is a documented precision trade-off, not an error;
/// choose `step` to bound the risk.
pub fn march_window<F>(
    mut predicate: F,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    step: Duration,
) -> Result<Vec<Interval>, PassError>
where
    F: FnMut(DateTime<Utc>) -> Result<bool, PassError>,
{
    if window_end <= window_start {
        return Err(PassError::InvalidWindow {
            reason: format!("window end {window_end} not after start {window_start}"),
        });
    }
    if step <= Duration::zero() {
        return Err(PassError::InvalidWindow {
            reason: format!("sampling step must be positive, got {step}"),
        });
    }

    let mut accesses = Vec::new();
    let mut state = MarchState::Initial;
    let mut prev_sample = window_start;
    let mut t = window_start;

    loop {
        let value = predicate(t)?;

        state = match (state, value) {
            // First sample: the window boundary itself is exact, no
            // refinement needed on either branch.
            (MarchState::Initial, true) => {
                trace!(at = %t, "window opens inside an access");
                MarchState::Visible {
                    access_start: window_start,
                }
            }
            (MarchState::Initial, false) => MarchState::NotVisible,

            // Rising edge: the crossing lies inside [prev_sample, t].
            (MarchState::NotVisible, true) => {
                let access_start = refine_crossing(&mut predicate, prev_sample, false, t, true)?;
                trace!(at = %access_start, "access opens");
                MarchState::Visible { access_start }
            }

            // Falling edge: close the access at the refined instant.
            (MarchState::Visible { access_start }, false) => {
                let access_end = refine_crossing(&mut predicate, prev_sample, true, t, false)?;
                debug!(start = %access_start, end = %access_end, "access closed");
                accesses.push(Interval::new(access_start, access_end));
                MarchState::NotVisible
            }

            // No change
            (MarchState::Visible { access_start }, true) => MarchState::Visible { access_start },
            (MarchState::NotVisible, false) => MarchState::NotVisible,
        };

        if t >= window_end {
            break;
        }
        prev_sample = t;
        // Clamp the final partial step to the window end
        t = (t + step).min(window_end);
    }

    // Terminal flush: an access still open at the end of the march closes
    // at the window boundary, which is exact by construction.
    if let MarchState::Visible { access_start } = state {
        debug!(start = %access_start, end = %window_end, "access closed at window end");
        accesses.push(Interval::new(access_start, window_end));
    }

    debug!(
        count = accesses.len(),
        start = %window_start,
        end = %window_end,
        "march complete"
    );
    Ok(accesses)
}
