pub mod guard;
pub mod models;
pub mod stats;
pub mod store;
pub mod timer;

pub use guard::PulseGuard;
pub use models::{
    DistractionEvent, DistractionReason, FocusSession, FocusTag, FocusTask, GuardLevel,
    PlanBlock, PresetProfile, SessionType, UserPreferences,
};
pub use stats::{
    compute_daily_stats, compute_month_summary, compute_week_stats, current_streak,
    daily_challenge, evaluate_achievements, generate_insights, longest_streak, recent_notes,
    tag_time_today, weekly_challenge, Achievement, Challenge, DailyStats, Insight, MonthSummary,
    TagTime,
};
pub use store::Store;
pub use timer::{ControllerStatus, SessionController, TimerState};

/// Initialize logging (reads the RUST_LOG env var). Call once from the
/// host; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
