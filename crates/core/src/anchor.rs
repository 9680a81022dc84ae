//! Where "today" comes from.
//!
//! Relative expressions are resolved against an anchor date. In production
//! that is the wall-clock date in one configured zone; tests and replays pin
//! it instead.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{SlotError, SlotResult};

pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

pub trait AnchorClock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Today's date in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    pub tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl AnchorClock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Always the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl AnchorClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parses an IANA zone name such as `Europe/Moscow`.
pub fn parse_timezone(name: &str) -> SlotResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}
