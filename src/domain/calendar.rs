//! Local calendar-day helpers
//!
//! Entries are stored as UTC instants; every day-bucketing decision (daily
//! reset, streaks, review age) is made on the local calendar.

use chrono::{DateTime, Days, Duration, Local, NaiveDate, Utc};

/// Local calendar day of an instant
pub fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// True if both instants fall on the same local calendar day
pub fn is_same_local_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    local_day(a) == local_day(b)
}

/// The instant `days` local calendar days before `now`, keeping the wall-clock time.
///
/// Falls back to a fixed 24h-per-day offset when the local wall time does not
/// exist on the target day (DST gaps), and clamps to the earliest
/// representable instant when the offset runs past it.
pub fn days_before(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.with_timezone(&Local)
        .checked_sub_days(Days::new(days as u64))
        .map(|d| d.with_timezone(&Utc))
        .or_else(|| now.checked_sub_signed(Duration::days(days as i64)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Noon on the given local date, as a UTC instant
#[cfg(test)]
pub(crate) fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    use chrono::TimeZone;

    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}
