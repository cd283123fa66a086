use ai_core::{Action, Policy, TickContext, WorldMut};

use crate::DecisionTree;

/// Runs a decision tree against the world's current perception and performs the result.
pub struct DtPolicy {
    tree: DecisionTree,
    last: Option<Action>,
}

impl DtPolicy {
    pub fn new(tree: DecisionTree) -> Self {
        Self { tree, last: None }
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last
    }
}

impl<W> Policy<W> for DtPolicy
where
    W: WorldMut + 'static,
{
    fn think(&mut self, _ctx: &TickContext, world: &mut W) {
        let action = self.tree.decide(world.state());
        self.last = Some(action);
        world.perform(action);
    }
}
