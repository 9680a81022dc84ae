use serde::{Deserialize, Serialize};

use super::{slot::Slot, time::TimeWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMatchKind {
    Exact,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateMatch {
    pub confidence: f64,
    pub kind: DateMatchKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeMatchKind {
    Overlap,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeMatch {
    pub confidence: f64,
    pub kind: TimeMatchKind,
    /// Intersected window for overlap matches.
    pub overlap: Option<TimeWindow>,
}

/// A compatible candidate/recruiter slot pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub candidate_slot: Slot,
    pub recruiter_slot: Slot,
    pub date_match: DateMatch,
    pub time_match: TimeMatch,
    /// Mean of the date and time confidences.
    pub confidence: f64,
}
