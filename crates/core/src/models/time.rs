use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// Minutes since midnight.
///
/// Clock values are built from a validated hour/minute pair, so anything
/// produced by the extractors lies in `[0, 1440)`. Day-period windows may
/// close at [`Minutes::END_OF_DAY`], the exclusive end of the day. Values
/// read from JSON are checked against the same bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Minutes(u16);

impl Minutes {
    pub const MIDNIGHT: Minutes = Minutes(0);
    pub const END_OF_DAY: Minutes = Minutes(24 * 60);

    /// Builds a clock value, rejecting hours above 23 and minutes above 59.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Whole-hour boundary in `0..=24`, used for day-period windows.
    pub(crate) fn from_hour_bound(hour: u32) -> Self {
        Self((hour.min(24) * 60) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for Minutes {
    type Error = SlotError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value > Self::END_OF_DAY.0 {
            return Err(SlotError::Validation(format!(
                "minutes must be at most {}, got {value}",
                Self::END_OF_DAY.0
            )));
        }
        Ok(Self(value))
    }
}

impl From<Minutes> for u16 {
    fn from(value: Minutes) -> Self {
        value.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A closed window of clock minutes, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeWindow {
    pub fn new(start: Minutes, end: Minutes) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn point(at: Minutes) -> Self {
        Self { start: at, end: at }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.get().saturating_sub(self.start.get())
    }

    /// Intersection of two windows, `None` when they are disjoint.
    pub fn intersect(&self, other: &TimeWindow) -> Option<TimeWindow> {
        TimeWindow::new(self.start.max(other.start), self.end.min(other.end))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Named part of the day with a fixed hour window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// `(start_hour, end_hour)` of the period.
    pub fn hours(self) -> (u32, u32) {
        match self {
            DayPeriod::Morning => (9, 12),
            DayPeriod::Afternoon => (12, 17),
            DayPeriod::Evening => (17, 21),
            DayPeriod::Night => (21, 24),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::Evening => "evening",
            DayPeriod::Night => "night",
        }
    }

    pub fn window(self) -> TimeWindow {
        let (start, end) = self.hours();
        TimeWindow {
            start: Minutes::from_hour_bound(start),
            end: Minutes::from_hour_bound(end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimeKind {
    /// A single point in time.
    Specific { start: Minutes },
    /// Explicit start and end.
    Range { start: Minutes, end: Minutes },
    /// Named day period mapped to its hour window.
    Period {
        period: DayPeriod,
        start: Minutes,
        end: Minutes,
    },
    /// "Any time": no numeric bounds at all.
    Any { label: String },
}

/// Time part of a slot.
///
/// `is_flexible` is orthogonal to the kind: a range written as "с 12 до 19"
/// denotes availability rather than a firm appointment and carries the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInfo {
    pub kind: TimeKind,
    pub is_flexible: bool,
}

impl TimeInfo {
    pub fn specific(start: Minutes) -> Self {
        Self {
            kind: TimeKind::Specific { start },
            is_flexible: false,
        }
    }

    /// A range, or `None` when `start > end`.
    pub fn range(start: Minutes, end: Minutes) -> Option<Self> {
        TimeWindow::new(start, end)?;
        Some(Self {
            kind: TimeKind::Range { start, end },
            is_flexible: false,
        })
    }

    pub fn period(period: DayPeriod) -> Self {
        let TimeWindow { start, end } = period.window();
        Self {
            kind: TimeKind::Period { period, start, end },
            is_flexible: true,
        }
    }

    pub fn any(label: impl Into<String>) -> Self {
        Self {
            kind: TimeKind::Any {
                label: label.into(),
            },
            is_flexible: true,
        }
    }

    pub fn flexible(mut self) -> Self {
        self.is_flexible = true;
        self
    }

    /// The minute interval used for overlap matching.
    ///
    /// A specific point is treated as a zero-length window; "any time" has no
    /// interval.
    pub fn interval(&self) -> Option<TimeWindow> {
        match &self.kind {
            TimeKind::Specific { start } => Some(TimeWindow::point(*start)),
            TimeKind::Range { start, end } | TimeKind::Period { start, end, .. } => {
                Some(TimeWindow {
                    start: *start,
                    end: *end,
                })
            }
            TimeKind::Any { .. } => None,
        }
    }
}

impl fmt::Display for TimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TimeKind::Specific { start } => write!(f, "{start}"),
            TimeKind::Range { start, end } => write!(f, "{start}-{end}"),
            TimeKind::Period { period, start, end } => {
                write!(f, "{} ({start}-{end})", period.label())
            }
            TimeKind::Any { label } => f.write_str(label),
        }
    }
}
