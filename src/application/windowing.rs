// Day windowing - splits an hourly series into local "yesterday" and "today"
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::ops::Range;

const HOURS_PER_DAY: usize = 24;

/// Index ranges into an hourly series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindows {
    pub yesterday: Range<usize>,
    pub today: Range<usize>,
}

impl DayWindows {
    /// Compute windows from the local hour of the last sample.
    ///
    /// Assumes one sample per hour with no gaps, ending at the current hour.
    /// Yesterday is always the 24 samples before today, so after a 23 or 25
    /// hour local day it starts one hour early or late.
    /// Bounds saturate at zero for series shorter than the windows.
    /// Returns `None` for an empty series.
    pub fn from_hourly(datetime: &[DateTime<Utc>], tz: Tz) -> Option<Self> {
        let last = datetime.last()?;
        let last_hour = last.with_timezone(&tz).hour() as usize;
        let len = datetime.len();

        let today_start = (len - 1).saturating_sub(last_hour);
        let yesterday_start = today_start.saturating_sub(HOURS_PER_DAY);

        if len < last_hour + 1 + HOURS_PER_DAY {
            tracing::warn!(
                "Series of {} samples is too short for a full yesterday window (last local hour {})",
                len,
                last_hour
            );
        }

        Some(Self {
            yesterday: yesterday_start..today_start,
            today: today_start..len,
        })
    }
}

/// Sub-slice of `values`, clamped to its length.
pub fn clamped_slice<'a, T>(values: &'a [T], range: &Range<usize>) -> &'a [T] {
    let end = range.end.min(values.len());
    let start = range.start.min(end);
    &values[start..end]
}

/// Local time of day as fractional hours (`hour + minute / 60`).
pub fn local_fractional_hour(instant: DateTime<Utc>, tz: Tz) -> f64 {
    let local = instant.with_timezone(&tz);
    local.hour() as f64 + local.minute() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use chrono_tz::America::Los_Angeles;

    fn hourly_series_ending(end: DateTime<Utc>, len: usize) -> Vec<DateTime<Utc>> {
        (0..len)
            .rev()
            .map(|back| end - Duration::hours(back as i64))
            .collect()
    }

    #[test]
    fn test_windows_for_regular_series() {
        let end = Los_Angeles
            .with_ymd_and_hms(2024, 7, 15, 14, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let series = hourly_series_ending(end, 60);

        let windows = DayWindows::from_hourly(&series, Los_Angeles).unwrap();
        assert_eq!(windows.today.len(), 15);
        assert_eq!(windows.yesterday.len(), 24);
        assert_eq!(windows.yesterday.end, windows.today.start);
        assert_eq!(windows.today.end, 60);

        let first_today = series[windows.today.start].with_timezone(&Los_Angeles);
        assert_eq!(first_today.hour(), 0);
        let first_yesterday = series[windows.yesterday.start].with_timezone(&Los_Angeles);
        assert_eq!(first_yesterday.hour(), 0);
    }

    #[test]
    fn test_windows_at_midnight() {
        let end = Los_Angeles
            .with_ymd_and_hms(2024, 7, 15, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let series = hourly_series_ending(end, 48);

        let windows = DayWindows::from_hourly(&series, Los_Angeles).unwrap();
        assert_eq!(windows.today, 47..48);
        assert_eq!(windows.yesterday, 23..47);
    }

    #[test]
    fn test_windows_saturate_for_short_series() {
        let end = Los_Angeles
            .with_ymd_and_hms(2024, 7, 15, 20, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let series = hourly_series_ending(end, 10);

        let windows = DayWindows::from_hourly(&series, Los_Angeles).unwrap();
        assert_eq!(windows.today, 0..10);
        assert_eq!(windows.yesterday, 0..0);
    }

    #[test]
    fn test_windows_after_fall_back_day() {
        // 2024-11-03 has 25 local hours; yesterday keeps 24 samples and starts at 01:00
        let end = Los_Angeles
            .with_ymd_and_hms(2024, 11, 4, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let series = hourly_series_ending(end, 60);

        let windows = DayWindows::from_hourly(&series, Los_Angeles).unwrap();
        assert_eq!(windows.today, 49..60);
        assert_eq!(windows.yesterday, 25..49);

        let first = series[windows.yesterday.start].with_timezone(&Los_Angeles);
        assert_eq!(first.naive_local().to_string(), "2024-11-03 01:00:00");
        let last = series[windows.yesterday.end - 1].with_timezone(&Los_Angeles);
        assert_eq!(last.naive_local().to_string(), "2024-11-03 23:00:00");
    }

    #[test]
    fn test_windows_after_spring_forward_day() {
        // 2024-03-10 has 23 local hours; yesterday reaches back to 23:00 the day before
        let end = Los_Angeles
            .with_ymd_and_hms(2024, 3, 11, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let series = hourly_series_ending(end, 60);

        let windows = DayWindows::from_hourly(&series, Los_Angeles).unwrap();
        assert_eq!(windows.today, 49..60);
        assert_eq!(windows.yesterday, 25..49);

        let first = series[windows.yesterday.start].with_timezone(&Los_Angeles);
        assert_eq!(first.naive_local().to_string(), "2024-03-09 23:00:00");
        let last = series[windows.yesterday.end - 1].with_timezone(&Los_Angeles);
        assert_eq!(last.naive_local().to_string(), "2024-03-10 23:00:00");
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(DayWindows::from_hourly(&[], Los_Angeles), None);
    }

    #[test]
    fn test_clamped_slice() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(clamped_slice(&values, &(1..3)), &[2.0, 3.0]);
        assert_eq!(clamped_slice(&values, &(2..10)), &[3.0]);
        assert!(clamped_slice(&values, &(5..10)).is_empty());
    }

    #[test]
    fn test_local_fractional_hour() {
        let instant = Los_Angeles
            .with_ymd_and_hms(2024, 7, 15, 19, 45, 30)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(local_fractional_hour(instant, Los_Angeles), 19.75);
    }
}
