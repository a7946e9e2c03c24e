//! Pulse Guard: distraction-detection strictness and the (stubbed)
//! calendar/motion integration points.

use chrono::NaiveDate;

use crate::models::{GuardLevel, PlanBlock};

/// Holds the configured strictness and monitoring flag. The motion sensor
/// feed is not wired in; `distraction_score` stays a placeholder until it
/// is.
#[derive(Debug, Clone)]
pub struct PulseGuard {
    level: GuardLevel,
    is_monitoring: bool,
}

impl PulseGuard {
    pub fn new(level: GuardLevel) -> Self {
        Self {
            level,
            is_monitoring: false,
        }
    }

    pub fn level(&self) -> GuardLevel {
        self.level
    }

    pub fn set_level(&mut self, level: GuardLevel) {
        self.level = level;
    }

    pub fn start_monitoring(&mut self) {
        self.is_monitoring = true;
    }

    pub fn stop_monitoring(&mut self) {
        self.is_monitoring = false;
    }

    pub fn is_monitoring(&self) -> bool {
        self.is_monitoring
    }

    /// Combined distraction score in 0.0..=1.0.
    pub fn distraction_score(&self) -> f64 {
        0.0
    }
}

impl Default for PulseGuard {
    fn default() -> Self {
        Self::new(GuardLevel::default())
    }
}

/// Planned focus blocks starting on `day`, local time. Stands in for a
/// platform calendar query until one is integrated.
pub fn focus_blocks_on(blocks: &[PlanBlock], day: NaiveDate) -> Vec<&PlanBlock> {
    blocks.iter().filter(|block| block.local_day() == day).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::models::PresetProfile;
    use crate::stats::testutil::{day, local_noon};

    #[test]
    fn monitoring_toggles_and_scores_stay_in_range() {
        let mut guard = PulseGuard::new(GuardLevel::Strict);
        assert!(!guard.is_monitoring());

        guard.start_monitoring();
        assert!(guard.is_monitoring());
        assert!((0.0..=1.0).contains(&guard.distraction_score()));

        guard.stop_monitoring();
        assert!(!guard.is_monitoring());
    }

    #[test]
    fn filters_plan_blocks_to_the_requested_day() {
        let block_on = |date| {
            let start = local_noon(date);
            PlanBlock {
                id: Uuid::new_v4(),
                start_time: start,
                end_time: start + Duration::minutes(50),
                preset: PresetProfile::DeepWork,
                task_id: None,
                is_completed: false,
            }
        };
        let blocks = vec![block_on(day(2026, 3, 4)), block_on(day(2026, 3, 5))];

        let todays = focus_blocks_on(&blocks, day(2026, 3, 4));

        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].id, blocks[0].id);
    }
}
