use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::{FocusSession, UserPreferences};

use super::streaks::longest_streak;

const DEEP_DIVE_THRESHOLD_SECS: u64 = 45 * 60;

/// Unlock state for one catalog entry. Recomputed in full on every
/// evaluation; nothing about unlocks is ever persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub is_unlocked: bool,
}

/// A time-boxed progress target derived from completed focus sessions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub target: u32,
    pub progress: u32,
    pub is_completed: bool,
}

impl Challenge {
    /// Display ratio, clamped to [0, 1] even when progress overshoots the
    /// target.
    pub fn progress_ratio(&self) -> f64 {
        let target = self.target.max(1);
        (f64::from(self.progress) / f64::from(target)).clamp(0.0, 1.0)
    }
}

/// Evaluate the fixed achievement catalog against the full history. All
/// four predicates run on every call; catalog order is stable.
pub fn evaluate_achievements(sessions: &[FocusSession]) -> Vec<Achievement> {
    let focus_sessions: Vec<&FocusSession> = sessions.iter().filter(|s| s.is_focus()).collect();

    let has_long_session = focus_sessions
        .iter()
        .any(|s| s.effective_duration_secs() >= DEEP_DIVE_THRESHOLD_SECS);

    let mut completed_per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for session in &focus_sessions {
        if session.was_completed {
            *completed_per_day.entry(session.local_day()).or_insert(0) += 1;
        }
    }
    let max_completed_in_a_day = completed_per_day.values().copied().max().unwrap_or(0);

    vec![
        Achievement {
            id: "first_focus",
            title: "First Focus",
            description: "Start your first focus session.",
            is_unlocked: !focus_sessions.is_empty(),
        },
        Achievement {
            id: "deep_dive",
            title: "Deep Dive",
            description: "Stay focused for at least 45 minutes in a single session.",
            is_unlocked: has_long_session,
        },
        Achievement {
            id: "four_in_row",
            title: "Four in a Row",
            description: "Complete 4 or more focus sessions in a single day.",
            is_unlocked: max_completed_in_a_day >= 4,
        },
        Achievement {
            id: "week_streak",
            title: "7-Day Streak",
            description: "Keep a daily focus habit for 7 days in a row.",
            is_unlocked: longest_streak(sessions) >= 7,
        },
    ]
}

/// Today's challenge: complete `daily_session_goal` focus sessions whose
/// start falls on `today`.
pub fn daily_challenge(
    sessions: &[FocusSession],
    preferences: &UserPreferences,
    today: NaiveDate,
) -> Challenge {
    let target = preferences.daily_session_goal;
    let progress = sessions
        .iter()
        .filter(|s| s.is_focus() && s.was_completed && s.local_day() == today)
        .count() as u32;

    Challenge {
        id: "daily_sessions",
        title: "Daily focus goal",
        description: format!("Complete {target} focus sessions today."),
        target,
        progress,
        is_completed: progress >= target,
    }
}

/// This week's challenge over the window `[today - 6 days, today + 1 day)`.
/// The target scales with the daily goal but never drops below 10.
pub fn weekly_challenge(
    sessions: &[FocusSession],
    preferences: &UserPreferences,
    today: NaiveDate,
) -> Challenge {
    let target = (preferences.daily_session_goal * 5).max(10);
    let window_start = today.checked_sub_days(Days::new(6)).unwrap_or(today);

    let progress = sessions
        .iter()
        .filter(|s| s.is_focus() && s.was_completed)
        .filter(|s| {
            let day = s.local_day();
            day >= window_start && day <= today
        })
        .count() as u32;

    Challenge {
        id: "weekly_sessions",
        title: "Weekly focus streak",
        description: format!("Reach {target} focus sessions this week."),
        target,
        progress,
        is_completed: progress >= target,
    }
}
