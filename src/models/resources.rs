//! Normalized projections of upstream API items.
//!
//! These are built fresh for every request and only `Weather` has a
//! persistence path (see `Store::save_weathers`).

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::constants::format::{SHORT_DATE, SHORT_DATE_LEN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub forecast: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub released_on: Option<String>,
    pub total_votes: Option<i64>,
    pub average_votes: Option<f64>,
    pub popularity: Option<f64>,
    pub image_url: Option<String>,
    pub overview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meetup {
    pub link: String,
    pub name: String,
    pub host: Option<String>,
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub name: String,
    pub location: Option<String>,
    pub length: Option<f64>,
    pub stars: Option<f64>,
    pub star_votes: Option<i64>,
    pub summary: Option<String>,
    pub trail_url: Option<String>,
    pub conditions: Option<String>,
    pub condition_date: Option<String>,
    pub condition_time: Option<String>,
}

/// Formats a unix timestamp (seconds) as a short UTC date, e.g. `Mon Jan 01 2018`.
#[must_use]
pub fn short_date(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| truncate_date(&dt.format(SHORT_DATE).to_string()))
}

/// Same as [`short_date`] for millisecond timestamps.
#[must_use]
pub fn short_date_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| truncate_date(&dt.format(SHORT_DATE).to_string()))
}

fn truncate_date(formatted: &str) -> String {
    formatted.chars().take(SHORT_DATE_LEN).collect()
}

/// Splits `"2018-07-21 20:58:45"` into its date and time halves.
#[must_use]
pub fn split_condition_date(raw: Option<&str>) -> (Option<String>, Option<String>) {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => match value.split_once(' ') {
            Some((date, time)) => (Some(date.to_string()), Some(time.to_string())),
            None => (Some(value.to_string()), None),
        },
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        // 2018-01-01T08:00:00Z
        assert_eq!(short_date(1_514_793_600).as_deref(), Some("Mon Jan 01 2018"));
    }

    #[test]
    fn test_short_date_is_fixed_length() {
        for secs in [0_i64, 1_540_000_000, 1_700_000_000, 2_000_000_000] {
            let date = short_date(secs).unwrap();
            assert_eq!(date.len(), SHORT_DATE_LEN, "{date}");
        }
    }

    #[test]
    fn test_short_date_millis() {
        assert_eq!(
            short_date_millis(1_514_793_600_000).as_deref(),
            Some("Mon Jan 01 2018")
        );
    }

    #[test]
    fn test_split_condition_date() {
        assert_eq!(
            split_condition_date(Some("2018-07-21 20:58:45")),
            (Some("2018-07-21".to_string()), Some("20:58:45".to_string()))
        );
        assert_eq!(
            split_condition_date(Some("2018-07-21")),
            (Some("2018-07-21".to_string()), None)
        );
        assert_eq!(split_condition_date(Some("  ")), (None, None));
        assert_eq!(split_condition_date(None), (None, None));
    }
}
