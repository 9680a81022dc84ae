use std::fmt;

use serde::{Deserialize, Serialize};

use super::{date::DateInfo, time::TimeInfo};

/// A structured (date, time) pair extracted from one fragment of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub original_text: String,
    pub date: DateInfo,
    pub time: TimeInfo,
    /// In `[0, 1]`.
    pub confidence: f64,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
