mod planner;
mod preferences;
mod preset;
mod session;
mod task;

pub use planner::PlanBlock;
pub use preferences::UserPreferences;
pub use preset::{GuardLevel, PresetProfile};
pub use session::{DistractionEvent, DistractionReason, FocusSession, FocusTag, SessionType};
pub use task::{find_task, FocusTask};
