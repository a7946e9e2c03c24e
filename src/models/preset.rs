use serde::{Deserialize, Serialize};

/// Pulse Guard strictness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GuardLevel {
    Relaxed,
    Medium,
    Strict,
}

impl GuardLevel {
    pub fn title(&self) -> &'static str {
        match self {
            GuardLevel::Relaxed => "Relaxed",
            GuardLevel::Medium => "Medium",
            GuardLevel::Strict => "Strict",
        }
    }
}

impl Default for GuardLevel {
    fn default() -> Self {
        GuardLevel::Medium
    }
}

/// Named bundle of focus/break durations plus a default guard strictness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PresetProfile {
    DeepWork,
    LightFocus,
    Study,
    Sprint,
}

impl Default for PresetProfile {
    fn default() -> Self {
        PresetProfile::LightFocus
    }
}

impl PresetProfile {
    pub const ALL: [PresetProfile; 4] = [
        PresetProfile::DeepWork,
        PresetProfile::LightFocus,
        PresetProfile::Study,
        PresetProfile::Sprint,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PresetProfile::DeepWork => "Deep Work",
            PresetProfile::LightFocus => "Light Focus",
            PresetProfile::Study => "Study",
            PresetProfile::Sprint => "Sprint",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetProfile::DeepWork => "50 min focus · 10 min break · strict guard",
            PresetProfile::LightFocus => "25 min focus · 5 min break · medium guard",
            PresetProfile::Study => "40 min focus · 10 min break · medium guard",
            PresetProfile::Sprint => "15 min focus · 3 min break · relaxed guard",
        }
    }

    pub fn focus_duration_secs(&self) -> u64 {
        match self {
            PresetProfile::DeepWork => 50 * 60,
            PresetProfile::LightFocus => 25 * 60,
            PresetProfile::Study => 40 * 60,
            PresetProfile::Sprint => 15 * 60,
        }
    }

    pub fn short_break_duration_secs(&self) -> u64 {
        match self {
            PresetProfile::DeepWork => 10 * 60,
            PresetProfile::LightFocus => 5 * 60,
            PresetProfile::Study => 10 * 60,
            PresetProfile::Sprint => 3 * 60,
        }
    }

    pub fn long_break_duration_secs(&self) -> u64 {
        match self {
            PresetProfile::DeepWork => 20 * 60,
            PresetProfile::LightFocus => 15 * 60,
            PresetProfile::Study => 20 * 60,
            PresetProfile::Sprint => 15 * 60,
        }
    }

    pub fn guard_level(&self) -> GuardLevel {
        match self {
            PresetProfile::DeepWork => GuardLevel::Strict,
            PresetProfile::LightFocus => GuardLevel::Medium,
            PresetProfile::Study => GuardLevel::Medium,
            PresetProfile::Sprint => GuardLevel::Relaxed,
        }
    }
}
