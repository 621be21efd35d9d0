//! End-to-end analyses driving the SGP4-backed propagator with a real TLE.

use chrono::Duration;
use satpass::{
    AccessOptions, EclipseKind, Frame, GroundTarget, Interval, Propagator, Sgp4Propagator,
    beta_angle_windows, compute_accesses, compute_gaps, eclipse_windows, sunlit_windows,
};

// ISS (ZARYA), epoch 2008-09-20
const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn iss() -> Sgp4Propagator {
    Sgp4Propagator::from_tle(Some("ISS (ZARYA)".to_string()), ISS_LINE1, ISS_LINE2).unwrap()
}

fn assert_tiling(window_secs: i64, accesses: &[Interval], gaps: &[Interval]) {
    let mut all: Vec<Interval> = accesses.iter().chain(gaps.iter()).copied().collect();
    all.sort_by_key(|iv| iv.start);
    assert!(!all.is_empty());
    let start = all.first().unwrap().start;
    let end = all.last().unwrap().end;
    assert_eq!(end - start, Duration::seconds(window_secs));
    for pair in all.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "window tiling broken");
    }
}

#[test]
fn iss_passes_over_a_mid_latitude_station() {
    let station = GroundTarget::new("Madrid", 40.43, -4.25, 650.0);
    let day = Duration::days(1);
    let options = AccessOptions::default();

    let mut prop = iss();
    let accesses = compute_accesses(
        &mut prop,
        &[station.clone()],
        day,
        Frame::Teme,
        Frame::Ecef,
        &options,
    )
    .unwrap();

    // The ISS covers latitudes up to ~51.6 deg, so a Madrid station sees
    // several passes per day, each bounded by the pass geometry of LEO.
    assert!(
        (1..=12).contains(&accesses.len()),
        "expected a handful of ISS passes, got {}",
        accesses.len()
    );
    for pass in &accesses {
        assert!(pass.start < pass.end);
        assert!(
            pass.duration() <= Duration::minutes(15),
            "LEO pass longer than 15 min: {:?}",
            pass
        );
    }
    for pair in accesses.windows(2) {
        assert!(pair[0].end <= pair[1].start, "passes must not overlap");
    }

    let mut prop = iss();
    let gaps = compute_gaps(
        &mut prop,
        &[station],
        day,
        Frame::Teme,
        Frame::Ecef,
        &options,
    )
    .unwrap();
    assert_tiling(86_400, &accesses, &gaps);
}

#[test]
fn raising_the_elevation_mask_shrinks_access_time() {
    let station = GroundTarget::new("Madrid", 40.43, -4.25, 650.0);
    let day = Duration::days(1);

    let total = |min_elevation_deg: f64| -> Duration {
        let mut prop = iss();
        let options = AccessOptions {
            min_elevation_deg,
            ..AccessOptions::default()
        };
        compute_accesses(
            &mut prop,
            std::slice::from_ref(&station),
            day,
            Frame::Teme,
            Frame::Ecef,
            &options,
        )
        .unwrap()
        .iter()
        .map(|iv| iv.duration())
        .sum()
    };

    let low_mask = total(5.0);
    let high_mask = total(25.0);
    assert!(
        high_mask <= low_mask,
        "raising the mask cannot add visibility: {high_mask} > {low_mask}"
    );
    assert!(low_mask > Duration::zero());
}

#[test]
fn eclipse_and_sunlit_windows_tile_one_day() {
    let day = Duration::days(1);
    let options = AccessOptions::default();

    let mut prop = iss();
    let eclipses = eclipse_windows(&mut prop, day, EclipseKind::Umbra, &options).unwrap();
    let mut prop = iss();
    let sunlit = sunlit_windows(&mut prop, day, EclipseKind::Umbra, &options).unwrap();

    assert_tiling(86_400, &eclipses, &sunlit);

    // The ISS spends well under half of each orbit in umbra
    let eclipse_total: Duration = eclipses.iter().map(|iv| iv.duration()).sum();
    assert!(
        eclipse_total < Duration::hours(12),
        "umbra time {eclipse_total} implausibly long"
    );
    for iv in &eclipses {
        assert!(
            iv.duration() <= Duration::minutes(50),
            "single umbra pass {:?} longer than an orbit's shadow arc",
            iv
        );
    }
}

#[test]
fn trivial_beta_threshold_spans_the_whole_window() {
    // Beta is bounded to [-90, 90], so a -95 deg "above" threshold is a
    // constant-true predicate: exactly one access covering the window.
    let day = Duration::days(1);
    let options = AccessOptions {
        step: Duration::minutes(30),
        ..AccessOptions::default()
    };

    let mut prop = iss();
    let epoch = prop.epoch();
    let windows = beta_angle_windows(&mut prop, day, -95.0, true, &options).unwrap();

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, epoch);
    assert_eq!(windows[0].end, epoch + day);
}

#[test]
fn beta_threshold_windows_partition_against_complement() {
    // "Above threshold" and "below threshold" marches are complementary
    // predicates; their access lists must interleave into one tiling.
    let day = Duration::days(1);
    let options = AccessOptions {
        step: Duration::minutes(10),
        ..AccessOptions::default()
    };

    let mut prop = iss();
    let above = beta_angle_windows(&mut prop, day, 0.0, true, &options).unwrap();
    let mut prop = iss();
    let below = beta_angle_windows(&mut prop, day, 0.0, false, &options).unwrap();

    assert_tiling(86_400, &above, &below);
}
