use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{FocusSession, FocusTag};

use super::types::{DailyStats, MonthSummary, TagTime};

/// Aggregate one local calendar day.
///
/// Focus time sums `actual_duration_secs` (a session with no recorded
/// actual contributes 0) over focus sessions started that day; completed
/// count is restricted to focus sessions; distractions count every session
/// type.
pub fn compute_daily_stats(sessions: &[FocusSession], day: NaiveDate) -> DailyStats {
    let mut focus_time_secs = 0u64;
    let mut sessions_completed = 0u32;
    let mut distractions = 0u32;

    for session in sessions.iter().filter(|s| s.local_day() == day) {
        distractions += session.distractions_count;
        if session.is_focus() {
            focus_time_secs += session.actual_duration_secs.unwrap_or(0);
            if session.was_completed {
                sessions_completed += 1;
            }
        }
    }

    DailyStats {
        date: day,
        focus_time_secs,
        sessions_completed,
        distractions,
    }
}

/// The 7 calendar days ending at `reference` (inclusive). Days with no
/// sessions at all are skipped rather than emitted as zero entries; the
/// surviving entries come back ascending by date.
pub fn compute_week_stats(sessions: &[FocusSession], reference: NaiveDate) -> Vec<DailyStats> {
    let mut week = Vec::new();

    for offset in 0..7 {
        let Some(day) = reference.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        if !sessions.iter().any(|s| s.local_day() == day) {
            continue;
        }
        week.push(compute_daily_stats(sessions, day));
    }

    week.sort_by_key(|stats| stats.date);
    week
}

/// Roll up the month containing `reference` over completed focus sessions
/// started within `[startOfMonth, startOfNextMonth)`. Durations fall back
/// to planned when no actual was recorded. Best day is the day with the
/// largest focus total; ties go to the earliest date.
pub fn compute_month_summary(sessions: &[FocusSession], reference: NaiveDate) -> MonthSummary {
    let month_start = reference.with_day(1).unwrap_or(reference);
    let next_month_start = month_start
        .checked_add_months(Months::new(1))
        .unwrap_or(month_start);

    let mut total_focus_secs = 0u64;
    let mut sessions_completed = 0u32;
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for session in sessions {
        if !session.is_focus() || !session.was_completed {
            continue;
        }
        let day = session.local_day();
        if day < month_start || day >= next_month_start {
            continue;
        }

        let secs = session.effective_duration_secs();
        total_focus_secs += secs;
        sessions_completed += 1;
        *by_day.entry(day).or_insert(0) += secs;
    }

    let mut best_day = None;
    let mut best_secs = 0u64;
    for (day, secs) in &by_day {
        if *secs > best_secs {
            best_secs = *secs;
            best_day = Some(*day);
        }
    }

    MonthSummary {
        total_focus_secs,
        sessions_completed,
        best_day,
    }
}

/// Time per tag across focus sessions started on `today`. A session
/// carrying several tags contributes its full effective duration to each
/// of them. Sorted descending by accumulated time; equal totals keep the
/// tag catalog order.
pub fn tag_time_today(sessions: &[FocusSession], today: NaiveDate) -> Vec<TagTime> {
    let mut by_tag: BTreeMap<FocusTag, u64> = BTreeMap::new();

    for session in sessions {
        if !session.is_focus() || session.local_day() != today {
            continue;
        }
        let secs = session.effective_duration_secs();
        for tag in &session.tags {
            *by_tag.entry(*tag).or_insert(0) += secs;
        }
    }

    let mut totals: Vec<TagTime> = by_tag
        .into_iter()
        .map(|(tag, total_secs)| TagTime { tag, total_secs })
        .collect();
    totals.sort_by(|a, b| b.total_secs.cmp(&a.total_secs));
    totals
}

/// The 3 most recent sessions whose notes are non-blank, newest first.
pub fn recent_notes(sessions: &[FocusSession]) -> Vec<FocusSession> {
    let mut noted: Vec<&FocusSession> = sessions
        .iter()
        .filter(|s| s.notes.as_deref().is_some_and(|n| !n.trim().is_empty()))
        .collect();
    noted.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    noted.into_iter().take(3).cloned().collect()
}
