use serde::Serialize;

use crate::models::FocusSession;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ControllerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl Default for ControllerStatus {
    fn default() -> Self {
        ControllerStatus::Idle
    }
}

/// In-flight timer state. `remaining_secs` only moves on `tick`; the wall
/// clock itself belongs to the host.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub status: ControllerStatus,
    pub current_session: Option<FocusSession>,
    pub remaining_secs: u64,
}

impl TimerState {
    pub fn begin(&mut self, session: FocusSession) {
        self.remaining_secs = session.planned_duration_secs;
        self.current_session = Some(session);
        self.status = ControllerStatus::Running;
    }

    /// Fraction of the planned duration already elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        match &self.current_session {
            Some(session) if session.planned_duration_secs > 0 => {
                1.0 - self.remaining_secs as f64 / session.planned_duration_secs as f64
            }
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
