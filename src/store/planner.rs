use crate::models::PlanBlock;

use super::Store;

const PLANNER_KEY: &str = "planner.blocks";

impl Store {
    pub fn load_plan_blocks(&self) -> Vec<PlanBlock> {
        self.load_or_default(PLANNER_KEY)
    }

    pub fn save_plan_blocks(&self, blocks: &[PlanBlock]) {
        self.persist(PLANNER_KEY, &blocks);
    }
}
