use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::trace;

use crate::lexicon::lexicon;
use crate::models::{DateInfo, RelativeDay};

/// A date expression found in text, before it is pinned to an anchor date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMention {
    Relative { word: String, day: RelativeDay },
    Weekday {
        word: String,
        weekday: Weekday,
        next_week: bool,
    },
    AnyDay { label: String },
}

/// Finds the date expression in a fragment without resolving it.
///
/// Relative days are checked before weekdays, then the "any day" marker.
pub fn detect_date(text: &str) -> Option<DateMention> {
    let lexicon = lexicon();

    if let Some(hit) = lexicon.relative_days.find(text) {
        trace!(word = %hit.word, "relative day");
        return Some(DateMention::Relative {
            word: hit.word,
            day: hit.value,
        });
    }

    if let Some(hit) = lexicon.weekdays.find(text) {
        let next_week = lexicon.next_week.contains(text);
        trace!(word = %hit.word, next_week, "weekday");
        return Some(DateMention::Weekday {
            word: hit.word,
            weekday: hit.value,
            next_week,
        });
    }

    lexicon
        .any_day
        .find(text)
        .map(|hit| DateMention::AnyDay { label: hit.word })
}

impl DateMention {
    /// Pins the mention to a calendar date relative to `anchor`.
    ///
    /// Returns `None` only if the resolved date falls outside chrono's range.
    pub fn resolve(self, anchor: NaiveDate) -> Option<DateInfo> {
        match self {
            DateMention::Relative { word, day } => {
                let day_offset = day.offset();
                let resolved_date = shift(anchor, i64::from(day_offset))?;
                Some(DateInfo::Relative {
                    word,
                    day_offset,
                    resolved_date,
                })
            }
            DateMention::Weekday {
                word,
                weekday,
                next_week,
            } => {
                let days = days_until(anchor.weekday(), weekday, next_week);
                let resolved_date = shift(anchor, days)?;
                Some(DateInfo::Weekday {
                    word,
                    weekday_index: weekday.num_days_from_monday() as u8,
                    resolved_date,
                })
            }
            DateMention::AnyDay { label } => Some(DateInfo::Flexible { label }),
        }
    }
}

/// Extracts and resolves the date expression of a fragment.
pub fn extract_date(text: &str, anchor: NaiveDate) -> Option<DateInfo> {
    detect_date(text)?.resolve(anchor)
}

/// Days from `today` to the next strictly-future `target`.
///
/// The same weekday as today means a week ahead; a "next week" marker adds
/// another seven days.
fn days_until(today: Weekday, target: Weekday, next_week: bool) -> i64 {
    let target = i64::from(target.num_days_from_monday());
    let today = i64::from(today.num_days_from_monday());
    let mut days_ahead = (target - today + 7) % 7;
    if days_ahead == 0 {
        days_ahead = 7;
    }
    if next_week {
        days_ahead += 7;
    }
    days_ahead
}

fn shift(anchor: NaiveDate, days: i64) -> Option<NaiveDate> {
    anchor.checked_add_signed(Duration::days(days))
}
