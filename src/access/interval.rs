//! Access intervals and gap derivation

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A maximal span of time over which a predicate held (an access) or did
/// not hold (a gap). Always `start < end` except for degenerate boundary
/// cases at the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True if `t` lies inside the half-open span `[start, end)`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

/// Compute the set-complement of an ordered access list within the bounded
/// analysis window.
///
/// Accesses and the returned gaps together exactly tile
/// `[window_start, window_end]` with no overlap and no uncovered span.
pub fn derive_gaps(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    accesses: &[Interval],
) -> Vec<Interval> {
    if accesses.is_empty() {
        return vec![Interval::new(window_start, window_end)];
    }

    let mut gaps = Vec::with_capacity(accesses.len() + 1);

    if accesses[0].start > window_start {
        gaps.push(Interval::new(window_start, accesses[0].start));
    }
    for pair in accesses.windows(2) {
        if pair[1].start > pair[0].end {
            gaps.push(Interval::new(pair[0].end, pair[1].start));
        }
    }
    if let Some(last) = accesses.last() {
        if last.end < window_end {
            gaps.push(Interval::new(last.end, window_end));
        }
    }

    gaps
}
