use std::fmt;

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Wall clock used to stamp log lines and default log file names.
///
/// Every call queries the clock again, so timezone or DST transitions are
/// picked up immediately. `Local` relies on chrono's local offset lookup,
/// which falls back to UTC when the timezone database is unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    /// `YYYY-MM-DD HH:MM:SS.fffffff` for the current instant.
    #[must_use]
    pub fn log_timestamp(self) -> String {
        match self {
            Self::Local => format_log_timestamp(&Local::now()),
            Self::Utc => format_log_timestamp(&Utc::now()),
        }
    }

    /// `YYYYMMDD_HHMMSS_fffffff` for the current instant, safe for file names.
    #[must_use]
    pub fn file_timestamp(self) -> String {
        match self {
            Self::Local => format_file_timestamp(&Local::now()),
            Self::Utc => format_file_timestamp(&Utc::now()),
        }
    }

    /// Parses `local` or `utc` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "utc" => Some(Self::Utc),
            _ => None,
        }
    }
}

/// Formats `dt` as `YYYY-MM-DD HH:MM:SS.fffffff`.
pub fn format_log_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("{}.{:07}", dt.format("%Y-%m-%d %H:%M:%S"), ticks(dt))
}

/// Formats `dt` as `YYYYMMDD_HHMMSS_fffffff`.
pub fn format_file_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("{}_{:07}", dt.format("%Y%m%d_%H%M%S"), ticks(dt))
}

/// Sub-second part in 100ns units. Leap seconds are clamped into the same second.
fn ticks<Tz: TimeZone>(dt: &DateTime<Tz>) -> u32 {
    dt.nanosecond().min(999_999_999) / 100
}
