//! Time samples and wall-clock sources
//!
//! The engine never reads the clock itself. Hosts pull a `TimeSample` from a
//! `TimeSource` once per frame and hand it to `ClockEngine::render`.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Wall-clock time at second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSample {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl TimeSample {
    /// Build a sample, rejecting out-of-range fields
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Parse `HH:MM` or `HH:MM:SS`
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':');
        let hour = parts.next()?.parse().ok()?;
        let minute = parts.next()?.parse().ok()?;
        let second = match parts.next() {
            Some(sec) => sec.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Self::from_hms(hour, minute, second)
    }

    /// Seconds since midnight
    pub fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Build from seconds since midnight (wraps at 24h)
    pub fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % 86_400;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// The sample `secs` seconds later (wraps at midnight)
    pub fn advanced_by(&self, secs: u32) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + secs % 86_400)
    }
}

impl std::fmt::Display for TimeSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Anything that can report the current wall-clock time
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// Local system time via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeSample {
        let now = chrono::Local::now();
        TimeSample {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second().min(59) as u8,
        }
    }
}

/// A source that always reports the same instant (tests, previews)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hms() {
        let t = TimeSample::parse("10:30:15").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (10, 30, 15));
    }

    #[test]
    fn test_parse_hm_defaults_seconds() {
        let t = TimeSample::parse(" 07:05 ").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (7, 5, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TimeSample::parse("24:00").is_none());
        assert!(TimeSample::parse("12:60:00").is_none());
        assert!(TimeSample::parse("12:00:60").is_none());
        assert!(TimeSample::parse("12").is_none());
        assert!(TimeSample::parse("12:00:00:00").is_none());
        assert!(TimeSample::parse("ab:cd").is_none());
    }

    #[test]
    fn test_advance_wraps_midnight() {
        let t = TimeSample::from_hms(23, 59, 59).unwrap();
        assert_eq!(t.advanced_by(1), TimeSample::from_hms(0, 0, 0).unwrap());
        assert_eq!(t.advanced_by(61), TimeSample::from_hms(0, 1, 0).unwrap());
    }

    #[test]
    fn test_display() {
        let t = TimeSample::from_hms(9, 5, 3).unwrap();
        assert_eq!(t.to_string(), "09:05:03");
    }

    #[test]
    fn test_system_clock_in_range() {
        let t = SystemClock.now();
        assert!(t.hour < 24 && t.minute < 60 && t.second < 60);
    }
}
