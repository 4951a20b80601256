//! Wire format for dates in API payloads.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A date string in a response body could not be parsed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot parse date: {0}")]
pub struct DateParseError(#[from] chrono::ParseError);

/// A calendar date as the API transmits it.
///
/// The service sends either `YYYY-MM-DD`, a full RFC 3339 timestamp, or
/// no date at all (`null` or an empty string). The last case decodes to
/// [`RateDate::NONE`] instead of failing. On output the date is always
/// rendered as `YYYY-MM-DD`; any time of day or offset that arrived
/// with a timestamp is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Option<NaiveDate>);

impl RateDate {
    /// The zero value: the service supplied no date.
    pub const NONE: RateDate = RateDate(None);

    /// Wraps a concrete calendar date.
    pub fn new(date: NaiveDate) -> Self {
        RateDate(Some(date))
    }

    /// Returns the date, or `None` for the zero value.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether this is the zero value.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Parses a wire date: strict `YYYY-MM-DD` first, RFC 3339 second.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        if s.is_empty() || s == "null" {
            return Ok(RateDate::NONE);
        }
        // chrono alone accepts short years and single-digit months, which
        // the service never sends; requiring the canonical rendering to
        // round-trip keeps the calendar-date parse strict.
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if date.format("%Y-%m-%d").to_string() == s {
                return Ok(RateDate(Some(date)));
            }
        }
        let timestamp = DateTime::parse_from_rfc3339(s)?;
        Ok(RateDate(Some(timestamp.date_naive())))
    }
}

impl From<NaiveDate> for RateDate {
    fn from(date: NaiveDate) -> Self {
        RateDate::new(date)
    }
}

impl fmt::Display for RateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => Ok(()),
        }
    }
}

impl Serialize for RateDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RateDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RateDateVisitor)
    }
}

struct RateDateVisitor;

impl<'de> Visitor<'de> for RateDateVisitor {
    type Value = RateDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YYYY-MM-DD string, an RFC 3339 timestamp, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RateDate, E> {
        RateDate::parse(v).map_err(de::Error::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RateDate, E> {
        Ok(RateDate::NONE)
    }

    fn visit_none<E: de::Error>(self) -> Result<RateDate, E> {
        Ok(RateDate::NONE)
    }
}
