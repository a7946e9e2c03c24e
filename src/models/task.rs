use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task that sessions may reference by id. The reference is weak: the
/// task list owns the task, and a session's `task_id` may dangle after the
/// task is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusTask {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl FocusTask {
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            notes: None,
            created_at,
            last_used_at: None,
        }
    }
}

/// Lookup against the current task collection. Returns `None` for dangling
/// references instead of assuming presence.
pub fn find_task<'a>(tasks: &'a [FocusTask], task_id: Option<Uuid>) -> Option<&'a FocusTask> {
    let id = task_id?;
    tasks.iter().find(|task| task.id == id)
}
