use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::FocusSession;

/// Distinct local calendar days containing at least one completed focus
/// session. Breaks and abandoned sessions never make a day active.
fn active_days(sessions: &[FocusSession]) -> BTreeSet<NaiveDate> {
    sessions
        .iter()
        .filter(|s| s.is_focus() && s.was_completed)
        .map(|s| s.local_day())
        .collect()
}

/// Longest run of consecutive active days anywhere in the history.
/// 0 for an empty history, at least 1 otherwise.
pub fn longest_streak(sessions: &[FocusSession]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for day in active_days(sessions) {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }

    best
}

/// Consecutive active days ending at `today`, walking backward until the
/// first gap. 0 when today itself has no completed focus session.
pub fn current_streak(sessions: &[FocusSession], today: NaiveDate) -> u32 {
    let days = active_days(sessions);
    let mut streak = 0u32;
    let mut cursor = today;

    while days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}
