use crate::models::FocusSession;

use super::Store;

const SESSIONS_KEY: &str = "sessions.history";

/// Session history adapter. The history is an append-only list; the one
/// sanctioned mutation is `replace_session`, which the review step uses to
/// attach a rating and notes after completion.
impl Store {
    pub fn load_sessions(&self) -> Vec<FocusSession> {
        self.load_or_default(SESSIONS_KEY)
    }

    pub fn append_session(&self, session: &FocusSession) {
        let mut all = self.load_sessions();
        all.push(session.clone());
        self.save_sessions(&all);
    }

    pub fn save_sessions(&self, sessions: &[FocusSession]) {
        self.persist(SESSIONS_KEY, &sessions);
    }

    /// Replace the most recent record carrying the same id. Returns false
    /// when no such record exists.
    pub fn replace_session(&self, updated: &FocusSession) -> bool {
        let mut all = self.load_sessions();
        let Some(index) = all.iter().rposition(|session| session.id == updated.id) else {
            return false;
        };
        all[index] = updated.clone();
        self.save_sessions(&all);
        true
    }
}
