use chrono::{DateTime, Datelike, Duration, Utc};

/// Bounds of the calendar week containing `now`: Sunday 00:00:00 through
/// Saturday 23:59:59, both UTC. The class listing defaults to this window.
pub fn week_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_from_sunday = now.weekday().num_days_from_sunday() as i64;
    let week_start = now.date_naive() - Duration::days(days_from_sunday);

    let start = week_start.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let end = (week_start + Duration::days(6)).and_hms_opt(23, 59, 59).unwrap().and_utc();

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn midweek_snaps_back_to_sunday() {
        // 2025-06-11 is a Wednesday
        let now = Utc.with_ymd_and_hms(2025, 6, 11, 15, 30, 0).unwrap();
        let (start, end) = week_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 8, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 14, 23, 59, 59).unwrap());
    }

    #[test]
    fn sunday_is_its_own_week_start() {
        let now = Utc.with_ymd_and_hms(2025, 6, 8, 0, 0, 0).unwrap();
        let (start, end) = week_bounds(now);
        assert_eq!(start, now);
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 14, 23, 59, 59).unwrap());
    }

    #[test]
    fn saturday_night_still_inside_week() {
        let now = Utc.with_ymd_and_hms(2025, 6, 14, 23, 59, 59).unwrap();
        let (start, end) = week_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 8, 0, 0, 0).unwrap());
        assert_eq!(end, now);
    }
}
