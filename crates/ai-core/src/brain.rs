use crate::{Policy, TickContext, WorldMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrainConfig {
    pub think_every_ticks: u32,
    pub think_offset_ticks: u32,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            think_every_ticks: 1,
            think_offset_ticks: 0,
        }
    }
}

impl BrainConfig {
    pub fn every(think_every_ticks: u32) -> Self {
        Self {
            think_every_ticks: think_every_ticks.max(1),
            think_offset_ticks: 0,
        }
    }

    pub fn should_think(&self, tick: u64) -> bool {
        let every = self.think_every_ticks.max(1) as u64;
        ((tick + (self.think_offset_ticks as u64)) % every) == 0
    }
}

/// Owns the live policy of one agent.
///
/// The policy is only ever replaced as a whole (see [`Brain::replace_policy`]), so a freshly
/// learned decision tree becomes visible to the next think tick in one step.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub config: BrainConfig,
    policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(policy: Box<dyn Policy<W>>) -> Self {
        Self {
            config: BrainConfig::default(),
            policy,
        }
    }

    pub fn with_config(mut self, config: BrainConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the policy if this tick is a think tick. Returns whether it ran.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> bool {
        if !self.config.should_think(ctx.tick) {
            return false;
        }
        self.policy.think(ctx, world);
        true
    }

    /// Installs `policy` and hands back the previous one.
    pub fn replace_policy(&mut self, policy: Box<dyn Policy<W>>) -> Box<dyn Policy<W>> {
        std::mem::replace(&mut self.policy, policy)
    }
}
