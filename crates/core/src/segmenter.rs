use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extract::{detect_date, extract_time};

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[,;\n]|\s+(?:и|или|and|or)\s+").expect("separator pattern is valid")
});

/// Splits an utterance on separators, trimming and dropping empty pieces.
pub fn split_fragments(text: &str) -> Vec<&str> {
    SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// A fragment naming a date but no time, e.g. "завтра" in "завтра, 15-18".
pub fn is_date_only(fragment: &str) -> bool {
    detect_date(fragment).is_some() && extract_time(fragment).is_none()
}

/// Splits an utterance into slot-candidate fragments.
///
/// A date-only fragment is glued to the fragment right after it, so
/// "завтра, 15-18" yields the single fragment "завтра 15-18". Order is
/// preserved.
pub fn segment(text: &str) -> Vec<String> {
    let pieces = split_fragments(text);
    let mut fragments = Vec::with_capacity(pieces.len());
    let mut index = 0;

    while index < pieces.len() {
        let current = pieces[index];
        match pieces.get(index + 1) {
            Some(next) if is_date_only(current) => {
                debug!(date = current, with = *next, "merging date-only fragment");
                fragments.push(format!("{current} {next}"));
                index += 2;
            }
            _ => {
                fragments.push(current.to_string());
                index += 1;
            }
        }
    }

    fragments
}
