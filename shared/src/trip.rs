//! Fixed trip dates and the countdown shown before departure.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone, Utc};

/// Colombia does not observe daylight saving time.
pub const COLOMBIA_UTC_OFFSET_SECS: i32 = -5 * 3600;

pub fn colombia_offset() -> FixedOffset {
    FixedOffset::east_opt(COLOMBIA_UTC_OFFSET_SECS).expect("offset within a day")
}

/// Calendar date in Colombia at the instant `now`.
pub fn colombia_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&colombia_offset()).date_naive()
}

/// The calendar range of the vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub start: NaiveDate,
    pub days: u32,
}

impl Default for TripWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 12, 30).expect("valid trip start"),
            days: 4,
        }
    }
}

impl TripWindow {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Last calendar day of the trip, inclusive.
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(self.start)
    }
}

/// Check-in instant, 3:00 PM Colombia time on the first day.
pub fn check_in() -> DateTime<FixedOffset> {
    colombia_offset()
        .with_ymd_and_hms(2025, 12, 30, 15, 0, 0)
        .single()
        .expect("valid check-in time")
}

/// Check-out instant, noon Colombia time on the last day.
pub fn check_out() -> DateTime<FixedOffset> {
    colombia_offset()
        .with_ymd_and_hms(2026, 1, 2, 12, 0, 0)
        .single()
        .expect("valid check-out time")
}

/// Whole days left before check-in, floored and never negative.
pub fn days_until_trip(now: DateTime<Utc>) -> i64 {
    let remaining = check_in().with_timezone(&Utc) - now;
    remaining.num_seconds().div_euclid(86_400).max(0)
}

pub fn should_show_countdown(now: DateTime<Utc>) -> bool {
    now < check_in().with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn trip_spans_four_days() {
        let trip = TripWindow::default();
        assert_eq!(trip.end(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }

    #[test]
    fn countdown_floors_partial_days() {
        // Check-in is 20:00 UTC on Dec 30.
        assert_eq!(days_until_trip(utc(2025, 12, 28, 21)), 1);
        assert_eq!(days_until_trip(utc(2025, 12, 28, 20)), 2);
    }

    #[test]
    fn countdown_never_negative() {
        assert_eq!(days_until_trip(utc(2026, 10, 18, 0)), 0);
        assert!(!should_show_countdown(utc(2026, 1, 1, 0)));
        assert!(should_show_countdown(utc(2025, 12, 30, 19)));
    }

    #[test]
    fn colombia_date_lags_utc_in_the_evening() {
        assert_eq!(
            colombia_today(utc(2025, 12, 31, 3)),
            NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
        );
    }

    #[test]
    fn check_out_follows_check_in() {
        assert!(check_out() > check_in());
    }
}
