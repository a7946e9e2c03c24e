use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preset::PresetProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionType {
    Focus,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    pub fn title(&self) -> &'static str {
        match self {
            SessionType::Focus => "Focus",
            SessionType::ShortBreak => "Short Break",
            SessionType::LongBreak => "Long Break",
        }
    }

    /// Built-in fallback durations, used when no preferences are available.
    pub fn default_duration_secs(&self) -> u64 {
        match self {
            SessionType::Focus => 25 * 60,
            SessionType::ShortBreak => 5 * 60,
            SessionType::LongBreak => 15 * 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FocusTag {
    Work,
    Study,
    Reading,
    Creative,
    Admin,
}

impl FocusTag {
    pub const ALL: [FocusTag; 5] = [
        FocusTag::Work,
        FocusTag::Study,
        FocusTag::Reading,
        FocusTag::Creative,
        FocusTag::Admin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FocusTag::Work => "Work",
            FocusTag::Study => "Study",
            FocusTag::Reading => "Reading",
            FocusTag::Creative => "Creative",
            FocusTag::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DistractionReason {
    Movement,
    AppSwitch,
    Inactivity,
    Manual,
}

impl DistractionReason {
    pub fn title(&self) -> &'static str {
        match self {
            DistractionReason::Movement => "Movement",
            DistractionReason::AppSwitch => "App switch",
            DistractionReason::Inactivity => "Inactivity",
            DistractionReason::Manual => "Manual",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistractionEvent {
    pub id: Uuid,
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub reason: DistractionReason,
}

/// One recorded timer interval. Append-only once completed; the review step
/// may later fill `focus_rating` and `notes` via find-by-id-and-replace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub start_time: DateTime<Utc>,
    pub planned_duration_secs: u64,
    #[serde(default)]
    pub actual_duration_secs: Option<u64>,
    pub was_completed: bool,
    #[serde(default)]
    pub distractions_count: u32,
    #[serde(default)]
    pub distraction_events: Vec<DistractionEvent>,
    #[serde(default)]
    pub task_id: Option<Uuid>,
    #[serde(default)]
    pub preset: PresetProfile,
    #[serde(default)]
    pub tags: BTreeSet<FocusTag>,
    #[serde(default)]
    pub focus_rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FocusSession {
    pub fn new(session_type: SessionType, start_time: DateTime<Utc>, planned_secs: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_type,
            start_time,
            planned_duration_secs: planned_secs,
            actual_duration_secs: None,
            was_completed: false,
            distractions_count: 0,
            distraction_events: Vec::new(),
            task_id: None,
            preset: PresetProfile::default(),
            tags: BTreeSet::new(),
            focus_rating: None,
            notes: None,
        }
    }

    pub fn is_focus(&self) -> bool {
        self.session_type == SessionType::Focus
    }

    /// Actual duration when recorded, planned otherwise.
    pub fn effective_duration_secs(&self) -> u64 {
        self.actual_duration_secs
            .unwrap_or(self.planned_duration_secs)
    }

    /// The local calendar day this session started on.
    pub fn local_day(&self) -> NaiveDate {
        self.start_time.with_timezone(&Local).date_naive()
    }
}
