use ai_core::{Policy, TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus};

/// Ticks a behavior tree once per think tick.
pub struct BtPolicy<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: BtStatus,
}

impl<W> BtPolicy<W>
where
    W: WorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            last: BtStatus::Running,
        }
    }

    pub fn last_status(&self) -> BtStatus {
        self.last
    }
}

impl<W> Policy<W> for BtPolicy<W>
where
    W: WorldMut + 'static,
{
    fn think(&mut self, ctx: &TickContext, world: &mut W) {
        self.last = self.root.tick(ctx, world);
        if self.last != BtStatus::Running {
            self.root.reset();
        }
    }
}
