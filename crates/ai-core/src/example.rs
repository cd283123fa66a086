#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Action, WorldState};

/// One labeled observation: what the agent perceived and what it did.
///
/// Training sets are plain `Vec`s; duplicates are meaningful because they weigh the action
/// distribution seen by the learner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingExample {
    pub state: WorldState,
    pub action: Action,
}

impl TrainingExample {
    pub fn new(state: WorldState, action: Action) -> Self {
        Self { state, action }
    }
}
