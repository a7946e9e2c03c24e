use chrono::NaiveDate;
use serde::Serialize;

use crate::models::FocusTag;

/// One day's aggregate. Computed on demand from the session history and
/// never cached across mutations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub focus_time_secs: u64,
    pub sessions_completed: u32,
    pub distractions: u32,
}

/// Current-month ("season") roll-up over completed focus sessions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub total_focus_secs: u64,
    pub sessions_completed: u32,
    pub best_day: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagTime {
    pub tag: FocusTag,
    pub total_secs: u64,
}
