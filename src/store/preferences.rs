use crate::models::UserPreferences;

use super::Store;

const PREFERENCES_KEY: &str = "user.preferences";

impl Store {
    /// Defaults when nothing was saved yet or the saved value no longer
    /// decodes.
    pub fn load_preferences(&self) -> UserPreferences {
        self.load_or_default(PREFERENCES_KEY)
    }

    pub fn save_preferences(&self, preferences: &UserPreferences) {
        self.persist(PREFERENCES_KEY, preferences);
    }
}
