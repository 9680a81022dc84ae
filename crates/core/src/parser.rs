use chrono::NaiveDate;
use tracing::debug;

use crate::extract::{extract_date, extract_time};
use crate::models::{DateInfo, Slot, TimeInfo, TimeKind};
use crate::segmenter::segment;

const BASE_CONFIDENCE: f64 = 0.5;
const FLEXIBLE_PENALTY: f64 = 0.1;

/// Turns one fragment into a slot.
///
/// A fragment needs both a date and a time; a date with no resolvable time is
/// dropped rather than guessed.
pub fn parse_fragment(fragment: &str, anchor: NaiveDate) -> Option<Slot> {
    let Some(date) = extract_date(fragment, anchor) else {
        debug!(fragment, "no date, dropping fragment");
        return None;
    };
    let Some(time) = extract_time(fragment) else {
        debug!(fragment, "no time, dropping fragment");
        return None;
    };

    let confidence = confidence(&date, &time);
    Some(Slot {
        original_text: fragment.to_string(),
        date,
        time,
        confidence,
    })
}

/// Segments an utterance and parses every fragment, silently skipping those
/// that do not form a slot.
pub fn parse_slots(text: &str, anchor: NaiveDate) -> Vec<Slot> {
    let slots: Vec<Slot> = segment(text)
        .iter()
        .filter_map(|fragment| parse_fragment(fragment, anchor))
        .collect();
    debug!(%anchor, slots = slots.len(), "parsed availability");
    slots
}

/// How sure we are that a slot reflects what was written.
pub fn confidence(date: &DateInfo, time: &TimeInfo) -> f64 {
    let date_bonus = match date {
        DateInfo::Relative { .. } => 0.3,
        DateInfo::Weekday { .. } => 0.2,
        DateInfo::Flexible { .. } => 0.0,
    };
    let time_bonus = match time.kind {
        TimeKind::Specific { .. } => 0.3,
        TimeKind::Range { .. } => 0.2,
        TimeKind::Period { .. } => 0.1,
        TimeKind::Any { .. } => 0.0,
    };
    let penalty = if date.is_flexible() || time.is_flexible {
        FLEXIBLE_PENALTY
    } else {
        0.0
    };

    (BASE_CONFIDENCE + date_bonus + time_bonus - penalty).clamp(0.0, 1.0)
}
