use crate::models::FocusTask;

use super::Store;

const TASKS_KEY: &str = "tasks.list";

impl Store {
    pub fn load_tasks(&self) -> Vec<FocusTask> {
        self.load_or_default(TASKS_KEY)
    }

    pub fn save_tasks(&self, tasks: &[FocusTask]) {
        self.persist(TASKS_KEY, &tasks);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::models::FocusTask;
    use crate::store::Store;

    #[test]
    fn round_trips_tasks() {
        let store = Store::in_memory().unwrap();
        let mut task = FocusTask::new("write the report", Utc::now());
        task.notes = Some("due friday".to_string());
        task.last_used_at = Some(Utc::now());

        store.save_tasks(&[task.clone()]);

        assert_eq!(store.load_tasks(), vec![task]);
    }

    #[test]
    fn undecodable_tasks_load_as_empty() {
        let store = Store::in_memory().unwrap();
        store.put_raw("tasks.list", "\"oops\"");
        assert!(store.load_tasks().is_empty());
    }
}
