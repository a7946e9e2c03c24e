use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preset::PresetProfile;

/// A planned focus block on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanBlock {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub preset: PresetProfile,
    #[serde(default)]
    pub task_id: Option<Uuid>,
    pub is_completed: bool,
}

impl PlanBlock {
    pub fn local_day(&self) -> NaiveDate {
        self.start_time.with_timezone(&Local).date_naive()
    }
}
