//! Time-of-day values for campus entries
//!
//! Entry times are written by the operator as `HH:mm` (24h, zero padded, no seconds).

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::validation::ParseError;

/// A validated `HH:mm` time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryTime(NaiveTime);

impl EntryTime {
    /// Parse a strict `HH:mm` string
    ///
    /// Exactly two digits, a colon and two digits are accepted. The hour must be in
    /// 00-23 and the minute in 00-59.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedTime(raw.to_string());

        let bytes = raw.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(malformed());
        }
        let digits_ok = [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !digits_ok {
            return Err(malformed());
        }

        let hour: u32 = raw[0..2].parse().map_err(|_| malformed())?;
        let minute: u32 = raw[3..5].parse().map_err(|_| malformed())?;

        NaiveTime::from_hms_opt(hour, minute, 0).map(Self).ok_or_else(malformed)
    }

    /// Build a time from hour and minute components
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for EntryTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EntryTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
