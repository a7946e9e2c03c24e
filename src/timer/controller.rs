use std::collections::BTreeSet;

use chrono::{Local, Utc};
use log::info;
use uuid::Uuid;

use crate::models::{
    find_task, DistractionEvent, DistractionReason, FocusSession, FocusTag, FocusTask,
    GuardLevel, PresetProfile, SessionType, UserPreferences,
};
use crate::store::Store;

use super::state::{ControllerStatus, TimerState};

/// Orchestrates one timed session at a time: start, pause, resume, tick,
/// complete, and the automatic chaining to the next session type. The
/// controller only writes history; aggregating it back out is the stats
/// module's job.
///
/// Driven by a host-owned 1 Hz `tick` callback; every call runs to
/// completion before the next tick is eligible.
pub struct SessionController {
    store: Store,
    preferences: UserPreferences,
    state: TimerState,
    selected_preset: PresetProfile,
    selected_tags: BTreeSet<FocusTag>,
    tasks: Vec<FocusTask>,
    current_task_id: Option<Uuid>,
    focus_sessions_in_row: u32,
    focus_completed_today: u32,
    pending_review: Option<Uuid>,
}

impl SessionController {
    pub fn new(store: Store) -> Self {
        let preferences = store.load_preferences();
        let tasks = store.load_tasks();

        // Daily-goal progress is recounted from history, not carried in
        // memory across restarts.
        let today = Local::now().date_naive();
        let focus_completed_today = store
            .load_sessions()
            .iter()
            .filter(|s| s.is_focus() && s.was_completed && s.local_day() == today)
            .count() as u32;

        Self {
            store,
            preferences,
            state: TimerState::default(),
            selected_preset: PresetProfile::default(),
            selected_tags: BTreeSet::new(),
            tasks,
            current_task_id: None,
            focus_sessions_in_row: 0,
            focus_completed_today,
            pending_review: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> ControllerStatus {
        self.state.status
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Whole-object replace, per the preferences contract.
    pub fn update_preferences(&mut self, preferences: UserPreferences) {
        self.store.save_preferences(&preferences);
        self.preferences = preferences;
    }

    pub fn guard_level(&self) -> GuardLevel {
        self.preferences.distraction_detection_level
    }

    /// The completed focus session awaiting a review, if any.
    pub fn pending_review(&self) -> Option<Uuid> {
        self.pending_review
    }

    // --- session lifecycle ---

    /// Start a focus session with the active preset's duration.
    pub fn start_focus(&mut self) {
        self.start_session(
            SessionType::Focus,
            Some(self.selected_preset.focus_duration_secs()),
        );
    }

    pub fn start_session(&mut self, session_type: SessionType, duration_secs: Option<u64>) {
        // Default durations come from preferences; re-read them so edits
        // made through the preferences adapter reach the next session.
        if duration_secs.is_none() {
            self.preferences = self.store.load_preferences();
        }

        let planned = match session_type {
            SessionType::Focus => {
                duration_secs.unwrap_or_else(|| self.selected_preset.focus_duration_secs())
            }
            _ => duration_secs
                .unwrap_or_else(|| self.preferences.duration_for_type_secs(session_type)),
        };

        let mut session = FocusSession::new(session_type, Utc::now(), planned);
        session.task_id = self.current_task_id;
        session.preset = self.selected_preset;
        session.tags = self.selected_tags.clone();

        // Pulse Guard strictness follows the preset of the session being run.
        self.preferences.distraction_detection_level = self.selected_preset.guard_level();

        if session_type == SessionType::Focus {
            self.focus_sessions_in_row += 1;
            self.touch_current_task();
        }

        info!(
            "Starting {} session {} ({planned}s planned)",
            session.session_type.title(),
            session.id
        );
        self.state.begin(session);
    }

    pub fn pause_session(&mut self) {
        if self.state.status == ControllerStatus::Running {
            self.state.status = ControllerStatus::Paused;
        }
    }

    pub fn resume_session(&mut self) {
        if self.state.status == ControllerStatus::Paused && self.state.remaining_secs > 0 {
            self.state.status = ControllerStatus::Running;
        }
    }

    /// Host-driven 1 Hz callback. Completes the session once the
    /// remaining time is exhausted.
    pub fn tick(&mut self) {
        if self.state.status != ControllerStatus::Running {
            return;
        }
        if self.state.remaining_secs > 0 {
            self.state.remaining_secs -= 1;
        } else {
            self.complete_session();
        }
    }

    /// Complete the in-flight session, record it, and chain to the next
    /// session type unless the daily goal is met.
    pub fn complete_session(&mut self) {
        let Some(mut session) = self.state.current_session.take() else {
            return;
        };
        self.state.remaining_secs = 0;

        session.was_completed = true;
        // Completion records the full planned duration, even when finished
        // early by hand.
        session.actual_duration_secs = Some(session.planned_duration_secs);

        self.store.append_session(&session);
        info!(
            "Completed {} session {}",
            session.session_type.title(),
            session.id
        );

        let session_type = session.session_type;
        if session_type == SessionType::Focus {
            self.focus_completed_today += 1;
            self.pending_review = Some(session.id);
        }
        self.state.current_session = Some(session);
        self.state.status = ControllerStatus::Completed;

        self.chain_next(session_type);
    }

    /// Discard the in-flight session without recording it.
    pub fn skip_session(&mut self) {
        self.state.reset();
    }

    /// Record a distraction on the in-flight session. Returns false when
    /// no session is running.
    pub fn log_distraction(&mut self, reason: DistractionReason) -> bool {
        let Some(session) = self.state.current_session.as_mut() else {
            return false;
        };
        session.distraction_events.push(DistractionEvent {
            id: Uuid::new_v4(),
            session_id: session.id,
            timestamp: Utc::now(),
            reason,
        });
        session.distractions_count += 1;
        true
    }

    /// Attach a rating (1..=5) and an optional note to the session
    /// surfaced for review, rewriting its history record in place.
    pub fn apply_review(&mut self, rating: u8, note: Option<&str>) -> bool {
        if !(1..=5).contains(&rating) {
            return false;
        }
        let Some(review_id) = self.pending_review else {
            return false;
        };

        let Some(mut session) = self
            .store
            .load_sessions()
            .into_iter()
            .rev()
            .find(|s| s.id == review_id)
        else {
            self.pending_review = None;
            return false;
        };

        session.focus_rating = Some(rating);
        if let Some(note) = note {
            if !note.trim().is_empty() {
                session.notes = Some(note.to_string());
            }
        }

        self.pending_review = None;
        self.store.replace_session(&session)
    }

    fn chain_next(&mut self, after: SessionType) {
        if self.focus_completed_today >= self.preferences.daily_session_goal {
            // Daily goal met: stop chaining and go back to idle.
            self.state.reset();
            return;
        }

        let next = match after {
            SessionType::Focus => {
                let cadence = self.preferences.sessions_before_long_break.max(1);
                if self.focus_sessions_in_row % cadence == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Focus,
        };

        self.start_session(next, None);
    }

    // --- presets & tags ---

    pub fn set_preset(&mut self, preset: PresetProfile) {
        self.selected_preset = preset;
    }

    pub fn selected_preset(&self) -> PresetProfile {
        self.selected_preset
    }

    pub fn toggle_tag(&mut self, tag: FocusTag) {
        if !self.selected_tags.remove(&tag) {
            self.selected_tags.insert(tag);
        }
    }

    pub fn selected_tags(&self) -> &BTreeSet<FocusTag> {
        &self.selected_tags
    }

    // --- task list ---

    pub fn tasks(&self) -> &[FocusTask] {
        &self.tasks
    }

    pub fn current_task(&self) -> Option<&FocusTask> {
        find_task(&self.tasks, self.current_task_id)
    }

    /// Add a task; blank titles are rejected.
    pub fn add_task(&mut self, title: &str) -> Option<Uuid> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = FocusTask::new(trimmed, Utc::now());
        let id = task.id;
        self.tasks.push(task);
        self.store.save_tasks(&self.tasks);
        Some(id)
    }

    /// Flip a task's completion flag. Completing the currently selected
    /// task also deselects it.
    pub fn toggle_task_completion(&mut self, task_id: Uuid) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        task.is_completed = !task.is_completed;
        let now_completed = task.is_completed;
        self.store.save_tasks(&self.tasks);

        if self.current_task_id == Some(task_id) && now_completed {
            self.current_task_id = None;
        }
        true
    }

    pub fn select_task(&mut self, task_id: Uuid) -> bool {
        if self.tasks.iter().any(|t| t.id == task_id) {
            self.current_task_id = Some(task_id);
            true
        } else {
            false
        }
    }

    pub fn clear_selected_task(&mut self) {
        self.current_task_id = None;
    }

    pub fn mark_current_task_done(&mut self) -> bool {
        let Some(task_id) = self.current_task_id else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        task.is_completed = true;
        self.store.save_tasks(&self.tasks);
        self.current_task_id = None;
        true
    }

    fn touch_current_task(&mut self) {
        let Some(task_id) = self.current_task_id else {
            return;
        };
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.last_used_at = Some(Utc::now());
            self.store.save_tasks(&self.tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    fn controller() -> SessionController {
        SessionController::new(Store::in_memory().unwrap())
    }

    fn controller_with(preferences: UserPreferences) -> SessionController {
        let store = Store::in_memory().unwrap();
        store.save_preferences(&preferences);
        SessionController::new(store)
    }

    #[test]
    fn starting_focus_uses_the_selected_preset() {
        let mut controller = controller();
        controller.set_preset(PresetProfile::DeepWork);
        controller.toggle_tag(FocusTag::Work);

        controller.start_focus();

        assert_eq!(controller.status(), ControllerStatus::Running);
        assert_eq!(controller.state().remaining_secs, 50 * 60);
        let session = controller.state().current_session.as_ref().unwrap();
        assert_eq!(session.preset, PresetProfile::DeepWork);
        assert!(session.tags.contains(&FocusTag::Work));
        assert_eq!(controller.guard_level(), GuardLevel::Strict);
    }

    #[test]
    fn break_durations_come_from_preferences() {
        let mut controller = controller_with(UserPreferences {
            short_break_duration_secs: 7 * 60,
            ..UserPreferences::default()
        });

        controller.start_session(SessionType::ShortBreak, None);

        assert_eq!(controller.state().remaining_secs, 7 * 60);
    }

    #[test]
    fn pause_and_resume_keep_the_remaining_time() {
        let mut controller = controller();
        controller.start_focus();
        controller.tick();
        controller.tick();
        let remaining = controller.state().remaining_secs;

        controller.pause_session();
        assert_eq!(controller.status(), ControllerStatus::Paused);
        controller.tick();
        assert_eq!(controller.state().remaining_secs, remaining);

        controller.resume_session();
        assert_eq!(controller.status(), ControllerStatus::Running);
    }

    #[test]
    fn completion_records_the_session_and_chains_to_a_short_break() {
        let mut controller = controller();
        let store = controller.store.clone();
        controller.start_focus();

        controller.complete_session();

        let history = store.load_sessions();
        assert_eq!(history.len(), 1);
        assert!(history[0].was_completed);
        assert_eq!(
            history[0].actual_duration_secs,
            Some(history[0].planned_duration_secs)
        );
        assert!(controller.pending_review().is_some());

        // auto-chained into the first break of the cycle
        assert_eq!(controller.status(), ControllerStatus::Running);
        let next = controller.state().current_session.as_ref().unwrap();
        assert_eq!(next.session_type, SessionType::ShortBreak);
    }

    #[test]
    fn ticking_down_to_zero_completes_the_session() {
        let mut controller = controller();
        controller.start_session(SessionType::Focus, Some(2));

        controller.tick();
        controller.tick();
        assert_eq!(controller.state().remaining_secs, 0);
        assert_eq!(controller.status(), ControllerStatus::Running);

        controller.tick();

        assert_eq!(controller.store.load_sessions().len(), 1);
        assert!(controller.pending_review().is_some());
    }

    #[test]
    fn every_nth_focus_session_earns_a_long_break() {
        let mut controller = controller_with(UserPreferences {
            sessions_before_long_break: 2,
            ..UserPreferences::default()
        });

        controller.start_focus();
        controller.complete_session();
        let first_break = controller.state().current_session.as_ref().unwrap();
        assert_eq!(first_break.session_type, SessionType::ShortBreak);

        controller.complete_session(); // break done, chains into focus
        assert_eq!(
            controller
                .state()
                .current_session
                .as_ref()
                .unwrap()
                .session_type,
            SessionType::Focus
        );

        controller.complete_session(); // second focus of the cycle
        let second_break = controller.state().current_session.as_ref().unwrap();
        assert_eq!(second_break.session_type, SessionType::LongBreak);
    }

    #[test]
    fn reaching_the_daily_goal_halts_the_chain() {
        let mut controller = controller_with(UserPreferences {
            daily_session_goal: 1,
            ..UserPreferences::default()
        });

        controller.start_focus();
        controller.complete_session();

        assert_eq!(controller.status(), ControllerStatus::Idle);
        assert!(controller.state().current_session.is_none());
        assert_eq!(controller.store.load_sessions().len(), 1);
    }

    #[test]
    fn skip_discards_the_session_without_recording_it() {
        let mut controller = controller();
        controller.start_focus();

        controller.skip_session();

        assert_eq!(controller.status(), ControllerStatus::Idle);
        assert!(controller.store.load_sessions().is_empty());
    }

    #[test]
    fn review_rewrites_the_completed_record_in_history() {
        let mut controller = controller_with(UserPreferences {
            daily_session_goal: 1,
            ..UserPreferences::default()
        });
        controller.start_focus();
        controller.complete_session();

        assert!(controller.apply_review(4, Some("kept my head down")));

        let history = controller.store.load_sessions();
        assert_eq!(history[0].focus_rating, Some(4));
        assert_eq!(history[0].notes.as_deref(), Some("kept my head down"));
        assert!(controller.pending_review().is_none());
    }

    #[test]
    fn review_rejects_out_of_range_ratings() {
        let mut controller = controller();
        controller.start_focus();
        controller.complete_session();

        assert!(!controller.apply_review(0, None));
        assert!(!controller.apply_review(6, None));
        assert!(controller.pending_review().is_some());
    }

    #[test]
    fn blank_review_notes_are_not_stored() {
        let mut controller = controller_with(UserPreferences {
            daily_session_goal: 1,
            ..UserPreferences::default()
        });
        controller.start_focus();
        controller.complete_session();

        assert!(controller.apply_review(5, Some("   ")));

        assert_eq!(controller.store.load_sessions()[0].notes, None);
    }

    #[test]
    fn distractions_accumulate_on_the_running_session() {
        let mut controller = controller();
        assert!(!controller.log_distraction(DistractionReason::Manual));

        controller.start_focus();
        assert!(controller.log_distraction(DistractionReason::Manual));
        assert!(controller.log_distraction(DistractionReason::AppSwitch));

        let session = controller.state().current_session.as_ref().unwrap();
        assert_eq!(session.distractions_count, 2);
        assert_eq!(session.distraction_events.len(), 2);
        assert_eq!(
            session.distraction_events[1].reason,
            DistractionReason::AppSwitch
        );
    }

    #[test]
    fn starting_a_focus_session_touches_the_selected_task() {
        let mut controller = controller();
        let task_id = controller.add_task("ship the release").unwrap();
        assert!(controller.select_task(task_id));

        controller.start_focus();

        let session = controller.state().current_session.as_ref().unwrap();
        assert_eq!(session.task_id, Some(task_id));
        assert!(controller.tasks()[0].last_used_at.is_some());
        // the bump is persisted through the task adapter
        assert!(controller.store.load_tasks()[0].last_used_at.is_some());
    }

    #[test]
    fn completing_the_selected_task_deselects_it() {
        let mut controller = controller();
        let task_id = controller.add_task("inbox zero").unwrap();
        controller.select_task(task_id);

        assert!(controller.toggle_task_completion(task_id));

        assert!(controller.current_task().is_none());
        assert!(controller.tasks()[0].is_completed);
    }

    #[test]
    fn blank_task_titles_are_rejected() {
        let mut controller = controller();
        assert_eq!(controller.add_task("  "), None);
        assert!(controller.tasks().is_empty());
    }
}
