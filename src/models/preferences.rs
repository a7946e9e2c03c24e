use serde::{Deserialize, Serialize};

use super::preset::GuardLevel;
use super::session::SessionType;

/// Process-wide configuration. Loaded once at startup, replaced as a whole
/// on save; there is no partial-update path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub focus_duration_secs: u64,
    pub short_break_duration_secs: u64,
    pub long_break_duration_secs: u64,
    pub sessions_before_long_break: u32,
    pub daily_session_goal: u32,
    pub is_sound_enabled: bool,
    pub is_vibration_enabled: bool,
    pub distraction_detection_level: GuardLevel,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            focus_duration_secs: 25 * 60,
            short_break_duration_secs: 5 * 60,
            long_break_duration_secs: 15 * 60,
            sessions_before_long_break: 4,
            daily_session_goal: 8,
            is_sound_enabled: true,
            is_vibration_enabled: true,
            distraction_detection_level: GuardLevel::default(),
        }
    }
}

impl UserPreferences {
    pub fn duration_for_type_secs(&self, session_type: SessionType) -> u64 {
        match session_type {
            SessionType::Focus => self.focus_duration_secs,
            SessionType::ShortBreak => self.short_break_duration_secs,
            SessionType::LongBreak => self.long_break_duration_secs,
        }
    }
}
