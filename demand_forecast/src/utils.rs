//! Timestamp helpers for the demand_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Build a start timestamp from a `YYYY-MM-DD` date and an hour of day
pub fn parse_start(date: &str, hour: u32) -> Result<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| ForecastError::InvalidInput(format!("Invalid date '{}': {}", date, e)))?;

    day.and_hms_opt(hour, 0, 0).ok_or_else(|| {
        ForecastError::InvalidInput(format!("Hour must be between 0 and 23, got {}", hour))
    })
}

/// Parse a timestamp such as `2025-01-01 13:00`, `2025-01-01T13:00:00` or a bare date
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp);
        }
    }

    parse_start(value, 0)
        .map_err(|_| ForecastError::InvalidInput(format!("Invalid timestamp '{}'", value)))
}

/// Timestamps for `horizon` hourly steps after `start` (the first is `start + 1h`)
pub fn hourly_timestamps(start: NaiveDateTime, horizon: usize) -> Result<Vec<NaiveDateTime>> {
    (1..=horizon)
        .map(|offset| {
            i64::try_from(offset)
                .ok()
                .and_then(Duration::try_hours)
                .and_then(|delta| start.checked_add_signed(delta))
                .ok_or_else(|| {
                    ForecastError::InvalidInput(format!(
                        "Forecast hour {} after {} is out of range",
                        offset, start
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd_h(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(parse_start("2025-01-01", 0).unwrap(), ymd_h(2025, 1, 1, 0));
        assert_eq!(parse_start(" 2024-02-29 ", 23).unwrap(), ymd_h(2024, 2, 29, 23));
    }

    #[rstest]
    #[case("2025-13-01", 0)]
    #[case("2023-02-29", 0)]
    #[case("01/15/2023", 0)]
    #[case("2025-01-01", 24)]
    fn test_parse_start_rejects(#[case] date: &str, #[case] hour: u32) {
        assert!(matches!(
            parse_start(date, hour),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case("2025-01-01 13:00:00")]
    #[case("2025-01-01T13:00:00")]
    #[case("2025-01-01 13:00")]
    #[case("2025-01-01T13:00")]
    fn test_parse_timestamp_formats(#[case] value: &str) {
        assert_eq!(parse_timestamp(value).unwrap(), ymd_h(2025, 1, 1, 13));
    }

    #[test]
    fn test_parse_timestamp_bare_date_and_garbage() {
        assert_eq!(parse_timestamp("2025-06-30").unwrap(), ymd_h(2025, 6, 30, 0));
        assert!(parse_timestamp("not-a-date").is_err());
    }

    #[test]
    fn test_hourly_timestamps_cross_midnight() {
        let stamps = hourly_timestamps(ymd_h(2024, 12, 31, 22), 3).unwrap();
        assert_eq!(
            stamps,
            vec![
                ymd_h(2024, 12, 31, 23),
                ymd_h(2025, 1, 1, 0),
                ymd_h(2025, 1, 1, 1)
            ]
        );
    }

    #[test]
    fn test_hourly_timestamps_overflow() {
        assert!(hourly_timestamps(NaiveDateTime::MAX, 1).is_err());
        assert!(hourly_timestamps(NaiveDateTime::MAX, 0).unwrap().is_empty());
    }
}
