//! Derived statistics over the session history.
//!
//! Everything in this module is a pure function over an explicitly passed
//! session collection (plus a reference day where calendar bucketing is
//! involved). There is no internal state to refresh: callers re-invoke
//! after the history changes and get a fresh result.

mod achievements;
mod insights;
mod metrics;
mod streaks;
mod types;

pub use achievements::{
    daily_challenge, evaluate_achievements, weekly_challenge, Achievement, Challenge,
};
pub use insights::{generate_insights, Insight};
pub use metrics::{
    compute_daily_stats, compute_month_summary, compute_week_stats, recent_notes, tag_time_today,
};
pub use streaks::{current_streak, longest_streak};
pub use types::{DailyStats, MonthSummary, TagTime};
