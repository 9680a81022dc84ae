use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{matching::Match, slot::Slot};
use crate::errors::{SlotError, SlotResult};
use crate::parser::parse_slots;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSlotsRequest {
    pub text: String,
    /// Defaults to today in the configured zone.
    pub anchor_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSlotsResponse {
    pub anchor_date: NaiveDate,
    pub slots: Vec<Slot>,
}

/// One side of a match request: raw text to parse, or slots parsed earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotSource {
    Text { text: String },
    Slots { slots: Vec<Slot> },
}

impl SlotSource {
    /// Checks slots supplied directly; text is always accepted.
    fn validate(&self, side: &str) -> SlotResult<()> {
        let SlotSource::Slots { slots } = self else {
            return Ok(());
        };
        for slot in slots {
            if !(0.0..=1.0).contains(&slot.confidence) {
                return Err(SlotError::Validation(format!(
                    "{side} slot confidence must be between 0 and 1, got {}",
                    slot.confidence
                )));
            }
            if let Some(window) = slot.time.interval() {
                if window.start > window.end {
                    return Err(SlotError::Validation(format!(
                        "{side} slot time starts after it ends: {window}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn into_slots(self, anchor_date: NaiveDate) -> Vec<Slot> {
        match self {
            SlotSource::Text { text } => parse_slots(&text, anchor_date),
            SlotSource::Slots { slots } => slots,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSlotsRequest {
    pub candidate: SlotSource,
    pub recruiter: SlotSource,
    pub anchor_date: Option<NaiveDate>,
    /// Drop matches below this confidence.
    pub min_confidence: Option<f64>,
    /// Keep at most this many matches.
    pub count: Option<usize>,
}

impl MatchSlotsRequest {
    pub fn validate(&self) -> SlotResult<()> {
        if let Some(min) = self.min_confidence {
            if !(0.0..=1.0).contains(&min) {
                return Err(SlotError::Validation(format!(
                    "min_confidence must be between 0 and 1, got {min}"
                )));
            }
        }
        if self.count == Some(0) {
            return Err(SlotError::Validation(
                "count must be at least 1".to_string(),
            ));
        }
        self.candidate.validate("candidate")?;
        self.recruiter.validate("recruiter")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSlotsResponse {
    pub anchor_date: NaiveDate,
    pub matches: Vec<Match>,
}
