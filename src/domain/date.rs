//! Calendar dates and send-time timestamps as SMSCenter expects them.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact date (`birthday`, `nameday`), sent as `YYYY-MM-DD`.
pub struct ContactDate(NaiveDate);

impl ContactDate {
    /// Parse a strict ISO `YYYY-MM-DD` string.
    ///
    /// Anything else (`2024/01/05`, `05-01-2024`, `20240105`, `2024-1-5`) and
    /// impossible dates (`2024-02-31`) are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDateFormat {
            input: input.to_owned(),
        };

        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Wire representation (`YYYY-MM-DD`).
    pub fn to_param(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for ContactDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for ContactDate {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Scheduled send time (`timestamp`), sent as Unix epoch seconds.
pub enum Timestamp {
    /// Epoch seconds, passed through unchanged.
    Epoch(i64),
    /// Wall-clock time without an offset; interpreted as UTC.
    Naive(NaiveDateTime),
    /// Time with an explicit offset.
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Query parameter name used by SMSCenter (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    /// Convert to Unix epoch seconds.
    pub fn to_epoch(self) -> i64 {
        match self {
            Self::Epoch(seconds) => seconds,
            Self::Naive(naive) => Utc.from_utc_datetime(&naive).timestamp(),
            Self::Aware(aware) => aware.timestamp(),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self::Epoch(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Aware(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Aware(value.fixed_offset())
    }
}
