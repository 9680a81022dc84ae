use tracing::debug;

use crate::models::{DateMatch, DateMatchKind, Match, Slot, TimeMatch, TimeMatchKind};

/// Confidence assigned whenever either side is flexible.
pub const FLEXIBLE_CONFIDENCE: f64 = 0.8;
/// Shortest intersection that still counts as a time match.
pub const MIN_OVERLAP_MINUTES: u16 = 30;

/// Compares the dates of two slots.
pub fn match_dates(a: &Slot, b: &Slot) -> Option<DateMatch> {
    if a.date.is_flexible() || b.date.is_flexible() {
        return Some(DateMatch {
            confidence: FLEXIBLE_CONFIDENCE,
            kind: DateMatchKind::Flexible,
        });
    }

    (a.date.resolved_date()? == b.date.resolved_date()?).then_some(DateMatch {
        confidence: 1.0,
        kind: DateMatchKind::Exact,
    })
}

/// Compares the times of two slots by the length of their intersection.
///
/// A full hour of overlap is a perfect match; anything under
/// [`MIN_OVERLAP_MINUTES`] is none at all.
pub fn match_times(a: &Slot, b: &Slot) -> Option<TimeMatch> {
    if a.time.is_flexible || b.time.is_flexible {
        return Some(TimeMatch {
            confidence: FLEXIBLE_CONFIDENCE,
            kind: TimeMatchKind::Flexible,
            overlap: None,
        });
    }

    let overlap = a.time.interval()?.intersect(&b.time.interval()?)?;
    let minutes = overlap.duration_minutes();
    if minutes < MIN_OVERLAP_MINUTES {
        return None;
    }

    Some(TimeMatch {
        confidence: (f64::from(minutes) / 60.0).min(1.0),
        kind: TimeMatchKind::Overlap,
        overlap: Some(overlap),
    })
}

/// Matches one candidate slot against one recruiter slot.
pub fn match_pair(candidate: &Slot, recruiter: &Slot) -> Option<Match> {
    let date_match = match_dates(candidate, recruiter)?;
    let time_match = match_times(candidate, recruiter)?;

    Some(Match {
        candidate_slot: candidate.clone(),
        recruiter_slot: recruiter.clone(),
        confidence: (date_match.confidence + time_match.confidence) / 2.0,
        date_match,
        time_match,
    })
}

/// Every compatible (candidate, recruiter) pair, best first.
///
/// The full cross product is evaluated; ties keep enumeration order.
pub fn match_slots(candidate_slots: &[Slot], recruiter_slots: &[Slot]) -> Vec<Match> {
    let mut matches: Vec<Match> = candidate_slots
        .iter()
        .flat_map(|candidate| {
            recruiter_slots
                .iter()
                .filter_map(move |recruiter| match_pair(candidate, recruiter))
        })
        .collect();

    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    debug!(
        candidates = candidate_slots.len(),
        recruiters = recruiter_slots.len(),
        matches = matches.len(),
        "matched slots"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateInfo, DayPeriod, Minutes, TimeInfo, TimeWindow};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    fn at(hour: u32, minute: u32) -> Minutes {
        Minutes::from_hm(hour, minute).unwrap()
    }

    fn on(d: u32) -> DateInfo {
        DateInfo::Relative {
            word: "завтра".to_string(),
            day_offset: 1,
            resolved_date: day(d),
        }
    }

    fn any_day() -> DateInfo {
        DateInfo::Flexible {
            label: "любой день".to_string(),
        }
    }

    fn slot(date: DateInfo, time: TimeInfo) -> Slot {
        Slot {
            original_text: format!("{date} {time}"),
            date,
            time,
            confidence: 1.0,
        }
    }

    fn range(from: (u32, u32), to: (u32, u32)) -> TimeInfo {
        TimeInfo::range(at(from.0, from.1), at(to.0, to.1)).unwrap()
    }

    #[test]
    fn test_exact_date_and_full_hour_overlap() {
        let candidate = slot(on(15), range((15, 0), (18, 0)));
        let recruiter = slot(on(15), range((16, 0), (17, 0)));

        let matches = match_slots(&[candidate], &[recruiter]);

        assert_eq!(matches.len(), 1);
        let found = &matches[0];
        assert_eq!(
            found.date_match,
            DateMatch {
                confidence: 1.0,
                kind: DateMatchKind::Exact
            }
        );
        assert_eq!(found.time_match.kind, TimeMatchKind::Overlap);
        assert_eq!(
            found.time_match.overlap,
            Some(TimeWindow {
                start: at(16, 0),
                end: at(17, 0)
            })
        );
        assert_eq!(found.time_match.confidence, 1.0);
        assert_eq!(found.confidence, 1.0);
    }

    #[test]
    fn test_overlap_threshold_boundary() {
        let candidate = slot(on(15), range((10, 0), (11, 0)));

        let short = slot(on(15), range((10, 31), (12, 0)));
        assert!(match_slots(&[candidate.clone()], &[short]).is_empty());

        let enough = slot(on(15), range((10, 30), (12, 0)));
        let matches = match_slots(&[candidate], &[enough]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].time_match.confidence, 0.5);
        assert_eq!(matches[0].confidence, 0.75);
    }

    #[test]
    fn test_different_dates_do_not_match() {
        let candidate = slot(on(15), range((10, 0), (12, 0)));
        let recruiter = slot(on(16), range((10, 0), (12, 0)));
        assert!(match_pair(&candidate, &recruiter).is_none());
    }

    #[test]
    fn test_specific_points_never_overlap() {
        let candidate = slot(on(15), TimeInfo::specific(at(15, 0)));
        let recruiter = slot(on(15), range((14, 0), (16, 0)));
        assert!(match_pair(&candidate, &recruiter).is_none());
    }

    #[test]
    fn test_flexible_date_always_scores_point_eight() {
        let candidate = slot(any_day(), range((10, 0), (12, 0)));
        let recruiter = slot(on(20), range((11, 0), (12, 0)));

        let found = match_pair(&candidate, &recruiter).unwrap();
        assert_eq!(found.date_match.kind, DateMatchKind::Flexible);
        assert_eq!(found.date_match.confidence, FLEXIBLE_CONFIDENCE);
        assert_eq!(found.confidence, 0.9);
    }

    #[test]
    fn test_flexible_time_skips_overlap() {
        let candidate = slot(on(15), TimeInfo::period(DayPeriod::Morning));
        let recruiter = slot(on(15), range((19, 0), (20, 0)));

        let found = match_pair(&candidate, &recruiter).unwrap();
        assert_eq!(found.time_match.kind, TimeMatchKind::Flexible);
        assert_eq!(found.time_match.confidence, FLEXIBLE_CONFIDENCE);
        assert_eq!(found.time_match.overlap, None);
    }

    #[test]
    fn test_roles_are_symmetric() {
        let a = slot(on(15), range((9, 0), (10, 15)));
        let b = slot(on(15), range((9, 30), (12, 0)));

        let ab = match_pair(&a, &b).unwrap();
        let ba = match_pair(&b, &a).unwrap();
        assert_eq!(ab.confidence, ba.confidence);
        assert_eq!(ab.time_match.overlap, ba.time_match.overlap);
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let candidates: Vec<Slot> = ["first", "second"]
            .into_iter()
            .map(|text| Slot {
                original_text: text.to_string(),
                ..slot(on(15), range((10, 0), (11, 0)))
            })
            .collect();
        let recruiters = vec![slot(on(15), range((10, 0), (11, 0)))];

        let matches = match_slots(&candidates, &recruiters);
        assert_eq!(matches[0].candidate_slot.original_text, "first");
        assert_eq!(matches[1].candidate_slot.original_text, "second");
    }

    #[test]
    fn test_sorted_best_first() {
        let candidates = vec![
            slot(on(15), range((10, 0), (10, 45))),
            slot(any_day(), range((10, 0), (11, 0))),
            slot(on(15), range((10, 0), (12, 0))),
        ];
        let recruiters = vec![slot(on(15), range((10, 0), (11, 0)))];

        let matches = match_slots(&candidates, &recruiters);
        let order: Vec<&str> = matches
            .iter()
            .map(|m| m.candidate_slot.original_text.as_str())
            .collect();

        assert_eq!(
            order,
            vec![
                candidates[2].original_text.as_str(),
                candidates[1].original_text.as_str(),
                candidates[0].original_text.as_str(),
            ]
        );
    }

    #[test]
    fn test_empty_sides() {
        let one = slot(on(15), range((10, 0), (11, 0)));
        assert!(match_slots(&[], &[one.clone()]).is_empty());
        assert!(match_slots(&[one], &[]).is_empty());
    }
}
