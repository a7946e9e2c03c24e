use chrono::{Datelike, Local};
use serde::Serialize;

use crate::models::FocusSession;

/// A short natural-language observation derived from the history.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub text: String,
}

impl Insight {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Derive the insight list. Always returns at least one entry; with no
/// usable history that entry is the fallback prompt.
pub fn generate_insights(sessions: &[FocusSession]) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Chronological order makes "the first 3 sessions" below well-defined
    // regardless of how the history was stored.
    let mut focus_sessions: Vec<&FocusSession> =
        sessions.iter().filter(|s| s.is_focus()).collect();
    focus_sessions.sort_by_key(|s| s.start_time);

    // Most productive weekday, by effective focus duration. Ties go to the
    // earlier weekday, Monday first.
    let mut by_weekday = [0u64; 7];
    let mut seen_weekday = [false; 7];
    for session in &focus_sessions {
        let weekday = session.start_time.with_timezone(&Local).weekday();
        let index = weekday.num_days_from_monday() as usize;
        by_weekday[index] += session.effective_duration_secs();
        seen_weekday[index] = true;
    }
    let mut best: Option<usize> = None;
    for (index, total) in by_weekday.iter().enumerate() {
        if seen_weekday[index] && best.map_or(true, |current| *total > by_weekday[current]) {
            best = Some(index);
        }
    }
    if let Some(index) = best {
        insights.push(Insight::new(format!(
            "You are most productive on {}s.",
            WEEKDAY_NAMES[index]
        )));
    }

    // Rating drop after the first three sessions of the history.
    if focus_sessions.len() >= 4 {
        let (first_three, rest) = focus_sessions.split_at(3);
        if let (Some(first_avg), Some(rest_avg)) =
            (average_rating(first_three), average_rating(rest))
        {
            if first_avg > 0.0 && rest_avg > 0.0 && rest_avg < first_avg {
                let drop = ((1.0 - rest_avg / first_avg) * 100.0).round() as i64;
                insights.push(Insight::new(format!(
                    "After 3 focus sessions your focus quality tends to drop by about {drop}%."
                )));
            }
        }
    }

    let total_distractions: u32 = focus_sessions.iter().map(|s| s.distractions_count).sum();
    if total_distractions > 0 {
        insights.push(Insight::new(format!(
            "You had {total_distractions} distractions logged across your recent focus sessions."
        )));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            "Start logging more focus sessions to unlock deeper insights.",
        ));
    }

    insights
}

fn average_rating(sessions: &[&FocusSession]) -> Option<f64> {
    let ratings: Vec<u8> = sessions.iter().filter_map(|s| s.focus_rating).collect();
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
    Some(f64::from(sum) / ratings.len() as f64)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::stats::testutil::{completed_focus_on, day, focus_on};

    #[test]
    fn empty_history_yields_exactly_the_fallback() {
        let insights = generate_insights(&[]);

        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0].text,
            "Start logging more focus sessions to unlock deeper insights."
        );
    }

    #[test]
    fn names_the_weekday_with_the_most_focus_time() {
        // 2026-03-04 is a Wednesday; give it two sessions vs one Thursday.
        let sessions = vec![
            completed_focus_on(day(2026, 3, 4)),
            completed_focus_on(day(2026, 3, 4)),
            completed_focus_on(day(2026, 3, 5)),
        ];

        let insights = generate_insights(&sessions);

        assert_eq!(insights[0].text, "You are most productive on Wednesdays.");
    }

    #[test]
    fn weekday_insight_counts_planned_time_for_unfinished_sessions() {
        let sessions = vec![focus_on(day(2026, 3, 6), None, false)];

        let insights = generate_insights(&sessions);

        assert_eq!(insights[0].text, "You are most productive on Fridays.");
    }

    #[test]
    fn reports_the_rating_drop_after_three_sessions() {
        let base = day(2026, 3, 2);
        let mut sessions = Vec::new();
        for (offset, rating) in [(0, 5), (1, 5), (2, 5), (3, 4), (4, 4), (5, 4)] {
            let mut session = completed_focus_on(base + Duration::days(offset));
            session.focus_rating = Some(rating);
            sessions.push(session);
        }

        let insights = generate_insights(&sessions);

        // 1 - 4/5 = 20%
        assert!(insights
            .iter()
            .any(|i| i.text.contains("drop by about 20%")));
    }

    #[test]
    fn no_fatigue_insight_when_ratings_improve() {
        let base = day(2026, 3, 2);
        let mut sessions = Vec::new();
        for (offset, rating) in [(0, 3), (1, 3), (2, 3), (3, 5)] {
            let mut session = completed_focus_on(base + Duration::days(offset));
            session.focus_rating = Some(rating);
            sessions.push(session);
        }

        let insights = generate_insights(&sessions);

        assert!(!insights.iter().any(|i| i.text.contains("drop")));
    }

    #[test]
    fn summarizes_logged_distractions() {
        let mut session = completed_focus_on(day(2026, 3, 4));
        session.distractions_count = 3;

        let insights = generate_insights(&[session]);

        assert!(insights
            .iter()
            .any(|i| i.text == "You had 3 distractions logged across your recent focus sessions."));
    }
}
