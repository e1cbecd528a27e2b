// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// A 24-hour wall-clock time, carried on the wire and in storage as a
/// zero-padded `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Accepts exactly `HH:MM` with hour 00-23 and minute 00-59.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("time"));
        }
        let bytes = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(ParseError::InvalidFormat("time must be in HH:MM format"));
        }
        if !bytes[0].is_ascii_digit()
            || !bytes[1].is_ascii_digit()
            || !bytes[3].is_ascii_digit()
            || !bytes[4].is_ascii_digit()
        {
            return Err(ParseError::InvalidFormat("time must be in HH:MM format"));
        }
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        if hour > 23 {
            return Err(ParseError::InvalidFormat("time hour must be 00-23"));
        }
        if minute > 59 {
            return Err(ParseError::InvalidFormat("time minute must be 00-59"));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn canonical_string(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_full_24_hour_grammar() {
        for raw in ["00:00", "08:00", "18:30", "23:59"] {
            let t = TimeOfDay::parse(raw).expect("valid time");
            assert_eq!(t.canonical_string(), raw);
        }
    }

    #[test]
    fn parse_rejects_everything_outside_the_grammar() {
        for raw in [
            "", "8:00", "24:00", "12:60", "1200", "12:0", "ab:cd", "12:345", " 12:00", "12 :00",
        ] {
            assert!(TimeOfDay::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn display_is_zero_padded() {
        let t = TimeOfDay::parse("07:05").expect("valid time");
        assert_eq!(t.to_string(), "07:05");
    }
}
