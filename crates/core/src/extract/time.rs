use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::lexicon::lexicon;
use crate::models::{Minutes, TimeInfo};

/// A numeric time shape and how to build a [`TimeInfo`] from its captures.
struct TimePattern {
    name: &'static str,
    regex: Regex,
    build: fn(&Captures) -> Option<TimeInfo>,
}

fn pattern(
    name: &'static str,
    regex: &str,
    build: fn(&Captures) -> Option<TimeInfo>,
) -> TimePattern {
    TimePattern {
        name,
        regex: Regex::new(regex).expect("time pattern is valid"),
        build,
    }
}

// Looser shapes are prefixes of stricter ones, so order matters. Each pattern
// refuses to start right after a digit, colon, dot or dash so "15:00-16:30" is
// never read as "00-16:30" and "2025-09-15" never as "09-15".
static NUMERIC_PATTERNS: LazyLock<Vec<TimePattern>> = LazyLock::new(|| {
    vec![
        pattern(
            "H-H:MM",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2})\s*[-–—]\s*([0-9]{1,2}):([0-9]{2})(?:[^0-9]|$)",
            |caps| range(clock(caps, 1, None)?, clock(caps, 2, Some(3))?),
        ),
        pattern(
            "H-H.MM",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2})\s*[-–—]\s*([0-9]{1,2})\.([0-9]{2})(?:[^0-9]|$)",
            |caps| range(clock(caps, 1, None)?, clock(caps, 2, Some(3))?),
        ),
        pattern(
            "H:MM-H:MM",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2}):([0-9]{2})\s*[-–—]\s*([0-9]{1,2}):([0-9]{2})(?:[^0-9]|$)",
            |caps| range(clock(caps, 1, Some(2))?, clock(caps, 3, Some(4))?),
        ),
        pattern(
            "H:MM",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2}):([0-9]{2})(?:[^0-9]|$)",
            |caps| Some(TimeInfo::specific(clock(caps, 1, Some(2))?)),
        ),
        pattern(
            "H.MM",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2})\.([0-9]{2})(?:[^0-9.]|$)",
            |caps| Some(TimeInfo::specific(clock(caps, 1, Some(2))?)),
        ),
        pattern(
            "H-H",
            r"(?:^|[^0-9:.\-–—])([0-9]{1,2})\s*[-–—]\s*([0-9]{1,2})(?:[^0-9:.]|$)",
            |caps| range(clock(caps, 1, None)?, clock(caps, 2, None)?),
        ),
    ]
});

static FROM_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:с|со|from)\s+([0-9]{1,2})\s+(?:до|to|till|until)\s+([0-9]{1,2})(?:[^0-9:.]|$)",
    )
    .expect("from-to pattern is valid")
});

/// Finds the time expression in a fragment.
///
/// Numeric shapes are tried first, most specific to least. Only the first
/// occurrence of each shape counts: if its numbers are out of range (hour
/// above 23, minute above 59) or its range runs backwards, the whole shape is
/// rejected and the next one is tried. Only then are
/// day periods, "с X до Y" and "any time" considered.
pub fn extract_time(text: &str) -> Option<TimeInfo> {
    for pattern in NUMERIC_PATTERNS.iter() {
        if let Some(info) = pattern
            .regex
            .captures(text)
            .and_then(|caps| (pattern.build)(&caps))
        {
            trace!(pattern = pattern.name, "numeric time");
            return Some(info);
        }
    }

    let lexicon = lexicon();

    if let Some(hit) = lexicon.day_periods.find(text) {
        trace!(word = %hit.word, "day period");
        return Some(TimeInfo::period(hit.value));
    }

    if let Some(info) = FROM_TO.captures(text).and_then(|caps| {
        range(clock(&caps, 1, None)?, clock(&caps, 2, None)?).map(TimeInfo::flexible)
    }) {
        trace!("from-to range");
        return Some(info);
    }

    lexicon
        .any_time
        .find(text)
        .map(|hit| TimeInfo::any(hit.word))
}

/// Reads an hour capture and an optional minute capture into a clock value.
fn clock(caps: &Captures, hour: usize, minute: Option<usize>) -> Option<Minutes> {
    let hour = number(caps, hour)?;
    let minute = match minute {
        Some(index) => number(caps, index)?,
        None => 0,
    };
    Minutes::from_hm(hour, minute)
}

fn number(caps: &Captures, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

fn range(start: Minutes, end: Minutes) -> Option<TimeInfo> {
    TimeInfo::range(start, end)
}
