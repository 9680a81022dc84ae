//! Static vocabulary for dates, weekdays and parts of the day.
//!
//! Every concept is listed with all of its spelling variants, including the
//! colloquial misspellings people actually type. Each table compiles into a
//! single case-insensitive regex bounded by word boundaries, so "вторник"
//! never fires inside an unrelated token and "послезавтра" is never read as
//! "завтра".

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;

use crate::models::{DayPeriod, RelativeDay};

const RELATIVE_DAYS: &[(&str, RelativeDay)] = &[
    ("сегодня", RelativeDay::Today),
    ("седня", RelativeDay::Today),
    ("сёдня", RelativeDay::Today),
    ("today", RelativeDay::Today),
    ("завтра", RelativeDay::Tomorrow),
    ("завтро", RelativeDay::Tomorrow),
    ("tomorrow", RelativeDay::Tomorrow),
    ("послезавтра", RelativeDay::DayAfterTomorrow),
    ("послезавтро", RelativeDay::DayAfterTomorrow),
    ("после завтра", RelativeDay::DayAfterTomorrow),
    ("day after tomorrow", RelativeDay::DayAfterTomorrow),
    ("вчера", RelativeDay::Yesterday),
    ("yesterday", RelativeDay::Yesterday),
    ("позавчера", RelativeDay::DayBeforeYesterday),
    ("day before yesterday", RelativeDay::DayBeforeYesterday),
];

const WEEKDAYS: &[(&str, Weekday)] = &[
    ("понедельник", Weekday::Mon),
    ("пн", Weekday::Mon),
    ("вторник", Weekday::Tue),
    ("вт", Weekday::Tue),
    ("среда", Weekday::Wed),
    ("среду", Weekday::Wed),
    ("ср", Weekday::Wed),
    ("четверг", Weekday::Thu),
    ("чт", Weekday::Thu),
    ("пятница", Weekday::Fri),
    ("пятницу", Weekday::Fri),
    ("пт", Weekday::Fri),
    ("суббота", Weekday::Sat),
    ("субботу", Weekday::Sat),
    ("сб", Weekday::Sat),
    ("воскресенье", Weekday::Sun),
    ("вс", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("thurs", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const DAY_PERIODS: &[(&str, DayPeriod)] = &[
    ("утром", DayPeriod::Morning),
    ("утро", DayPeriod::Morning),
    ("с утра", DayPeriod::Morning),
    ("morning", DayPeriod::Morning),
    ("днем", DayPeriod::Afternoon),
    ("днём", DayPeriod::Afternoon),
    ("после обеда", DayPeriod::Afternoon),
    ("afternoon", DayPeriod::Afternoon),
    ("вечером", DayPeriod::Evening),
    ("вечер", DayPeriod::Evening),
    ("evening", DayPeriod::Evening),
    ("ночью", DayPeriod::Night),
    ("ночь", DayPeriod::Night),
    ("night", DayPeriod::Night),
];

const NEXT_WEEK: &[&str] = &[
    "на следующей неделе",
    "следующей неделе",
    "следующая неделя",
    "на след неделе",
    "next week",
];

const ANY_DAY: &[&str] = &["в любой день", "любой день", "any day"];

const ANY_TIME: &[&str] = &[
    "в любое время",
    "любое время",
    "когда угодно",
    "any time",
    "anytime",
];

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

/// The process-wide lexicon, compiled on first use.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

/// A phrase found in text together with its canonical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseHit<T> {
    /// The phrase as written, lower-cased with whitespace collapsed.
    pub word: String,
    pub value: T,
}

/// Many spellings mapped onto one canonical value.
pub struct PhraseTable<T> {
    pattern: Regex,
    values: HashMap<String, T>,
}

impl<T: Copy> PhraseTable<T> {
    fn new(entries: &[(&str, T)]) -> Self {
        let mut phrases: Vec<&str> = entries.iter().map(|(phrase, _)| *phrase).collect();
        // Longest first: alternation is leftmost-first, not leftmost-longest.
        phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));

        let alternation = phrases
            .iter()
            .map(|phrase| phrase_pattern(phrase))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            .expect("lexicon phrases form a valid pattern");

        let values = entries
            .iter()
            .map(|(phrase, value)| (normalize_phrase(phrase), *value))
            .collect();

        Self { pattern, values }
    }

    /// The leftmost phrase of the table occurring in `text`.
    pub fn find(&self, text: &str) -> Option<PhraseHit<T>> {
        let found = self.pattern.find(text)?;
        let word = normalize_phrase(found.as_str());
        let value = *self.values.get(&word)?;
        Some(PhraseHit { word, value })
    }

    pub fn contains(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl PhraseTable<()> {
    fn markers(phrases: &[&str]) -> Self {
        let entries: Vec<(&str, ())> = phrases.iter().map(|phrase| (*phrase, ())).collect();
        Self::new(&entries)
    }
}

pub struct Lexicon {
    pub relative_days: PhraseTable<RelativeDay>,
    pub weekdays: PhraseTable<Weekday>,
    pub day_periods: PhraseTable<DayPeriod>,
    pub next_week: PhraseTable<()>,
    pub any_day: PhraseTable<()>,
    pub any_time: PhraseTable<()>,
}

impl Lexicon {
    fn build() -> Self {
        Self {
            relative_days: PhraseTable::new(RELATIVE_DAYS),
            weekdays: PhraseTable::new(WEEKDAYS),
            day_periods: PhraseTable::new(DAY_PERIODS),
            next_week: PhraseTable::markers(NEXT_WEEK),
            any_day: PhraseTable::markers(ANY_DAY),
            any_time: PhraseTable::markers(ANY_TIME),
        }
    }
}

/// Words of a phrase joined by flexible whitespace.
fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
