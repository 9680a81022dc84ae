use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical relative-day concept shared by all of its spelling variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDay {
    DayBeforeYesterday,
    Yesterday,
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl RelativeDay {
    /// Signed day offset from the anchor date.
    pub fn offset(self) -> i32 {
        match self {
            RelativeDay::DayBeforeYesterday => -2,
            RelativeDay::Yesterday => -1,
            RelativeDay::Today => 0,
            RelativeDay::Tomorrow => 1,
            RelativeDay::DayAfterTomorrow => 2,
        }
    }
}

/// Date part of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateInfo {
    Relative {
        word: String,
        day_offset: i32,
        resolved_date: NaiveDate,
    },
    Weekday {
        word: String,
        /// Monday = 0.
        weekday_index: u8,
        resolved_date: NaiveDate,
    },
    /// "Any day": no concrete date.
    Flexible { label: String },
}

impl DateInfo {
    pub fn resolved_date(&self) -> Option<NaiveDate> {
        match self {
            DateInfo::Relative { resolved_date, .. } | DateInfo::Weekday { resolved_date, .. } => {
                Some(*resolved_date)
            }
            DateInfo::Flexible { .. } => None,
        }
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self, DateInfo::Flexible { .. })
    }
}

impl fmt::Display for DateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInfo::Relative { resolved_date, .. } | DateInfo::Weekday { resolved_date, .. } => {
                write!(f, "{}", resolved_date.format("%Y-%m-%d"))
            }
            DateInfo::Flexible { label } => f.write_str(label),
        }
    }
}
