use crate::search::{Action, Plan, StateId, Task};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: Action,
        state: StateId,
    },
    #[error("plan does not reach the goal, final state is {final_state}")]
    GoalNotReached { final_state: StateId },
}

/// Replays `plan` from the task's start on its transition model.
pub fn validate(plan: &Plan, task: &Task) -> Result<(), ValidationError> {
    let generator = task.generator();
    let mut cur_state = task.start;
    for (step, &action) in plan.steps().iter().enumerate() {
        cur_state = generator
            .generate_successor(cur_state, action)
            .ok_or(ValidationError::NotApplicable {
                step,
                action,
                state: cur_state,
            })?;
    }

    if !task.is_goal(cur_state) {
        return Err(ValidationError::GoalNotReached {
            final_state: cur_state,
        });
    }

    Ok(())
}
