use ai_core::{TickContext, WorldMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_success(self) -> bool {
        self == BtStatus::Success
    }

    pub fn is_failure(self) -> bool {
        self == BtStatus::Failure
    }

    pub fn is_running(self) -> bool {
        self == BtStatus::Running
    }

    /// Swaps success and failure; running stays running.
    pub fn invert(self) -> Self {
        match self {
            BtStatus::Success => BtStatus::Failure,
            BtStatus::Failure => BtStatus::Success,
            BtStatus::Running => BtStatus::Running,
        }
    }
}

impl From<bool> for BtStatus {
    fn from(ok: bool) -> Self {
        if ok {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

/// One node of a behavior tree.
///
/// Trees are built once and ticked every step. Composites own their children outright; the only
/// state that changes between ticks is the bookkeeping of memory composites and whatever the
/// world itself carries.
pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus;

    /// Forgets any in-progress bookkeeping (recursively).
    fn reset(&mut self);
}
