//! TLE parsing utilities

use chrono::{DateTime, Utc};

/// Parse the epoch field of TLE line 1 into a UTC timestamp.
///
/// The epoch occupies columns 19-32 (1-based) as a two-digit year, day of
/// year, and fractional day. Years 57-99 are 19xx, 00-56 are 20xx.
pub fn parse_tle_epoch_to_utc(line1: &str) -> Option<DateTime<Utc>> {
    // Checked byte range: rejects short lines and lines where the field
    // boundary lands inside a multibyte character.
    let s = line1.get(18..32)?;
    let mut parts = s.trim().split('.');
    let yyddd = parts.next()?;
    let frac = parts.next().unwrap_or("0");
    if yyddd.len() < 3 {
        return None;
    }
    let (yy_str, ddd_str) = yyddd.split_at(2);
    let yy: i32 = yy_str.parse().ok()?;
    let ddd: i32 = ddd_str.parse().ok()?;
    let year = if yy >= 57 { 1900 + yy } else { 2000 + yy };
    let jan1 = chrono::NaiveDate::from_ymd_opt(year, 1, 1)?;
    let date = jan1.checked_add_signed(chrono::Duration::days((ddd - 1) as i64))?;
    let frac_sec: f64 = format!("0.{}", frac).parse::<f64>().ok()? * 86400.0;
    let secs = frac_sec.trunc() as i64;
    let nanos = ((frac_sec - (secs as f64)) * 1e9).round() as i64;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let ndt = midnight + chrono::Duration::seconds(secs) + chrono::Duration::nanoseconds(nanos);
    Some(DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
}
