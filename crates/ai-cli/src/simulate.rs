//! Headless run of the enemy tree over a random perception stream.

use std::collections::BTreeMap;

use ai_bt::BtPolicy;
use ai_core::{Action, Brain, DeterministicRng, SplitMix64, TickContext, Vocabulary, WorldState};
use ai_tools::ExampleSink;
use tracing::{debug, info};

use crate::enemy::{enemy_tree, EnemyWorld};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub ticks: u64,
    pub seed: u64,
    pub dt_seconds: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 1_000,
            seed: 0,
            dt_seconds: 0.1,
        }
    }
}

/// Perception that drifts: each tick every attribute flips with a small probability, so facts
/// persist across runs of ticks the way real sightings do.
#[derive(Debug, Clone)]
pub struct Perception {
    rng: SplitMix64,
    state: WorldState,
    flip_chance: f32,
}

impl Perception {
    pub const DEFAULT_FLIP_CHANCE: f32 = 0.1;

    pub fn new(vocabulary: &Vocabulary, seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            state: vocabulary.blank_state(),
            flip_chance: Self::DEFAULT_FLIP_CHANCE,
        }
    }

    pub fn with_flip_chance(mut self, flip_chance: f32) -> Self {
        self.flip_chance = flip_chance;
        self
    }

    pub fn next_state(&mut self) -> &WorldState {
        let flips: Vec<_> = self
            .state
            .iter()
            .map(|(attribute, value)| (attribute.clone(), value))
            .collect();
        for (attribute, value) in flips {
            if self.rng.next_f32_unit() < self.flip_chance {
                self.state.set(attribute, !value);
            }
        }
        &self.state
    }
}

#[derive(Debug)]
pub struct SimReport<S> {
    pub ticks: u64,
    pub action_counts: BTreeMap<Action, u64>,
    /// The sink the run recorded into.
    pub sink: S,
}

impl<S> SimReport<S> {
    pub fn count(&self, action: Action) -> u64 {
        self.action_counts.get(&action).copied().unwrap_or(0)
    }
}

/// Runs the enemy tree for `config.ticks` ticks, recording one example per tick into `sink`.
pub fn run_simulation<S>(config: &SimConfig, vocabulary: &Vocabulary, sink: S) -> SimReport<S>
where
    S: ExampleSink + 'static,
{
    let mut brain = Brain::new(Box::new(BtPolicy::new(enemy_tree::<S>())));
    let mut world = EnemyWorld::new(sink);
    let mut perception = Perception::new(vocabulary, config.seed ^ 0x5EED);
    let mut action_counts = BTreeMap::new();

    info!(ticks = config.ticks, seed = config.seed, "simulating enemy");
    let mut ctx = TickContext::new(0, config.dt_seconds, config.seed);
    for _ in 0..config.ticks {
        world.state = perception.next_state().clone();
        world.last_action = None;
        brain.tick(&ctx, &mut world);
        if let Some(action) = world.last_action {
            *action_counts.entry(action).or_insert(0) += 1;
        }
        debug!(tick = ctx.tick, state = %world.state, action = ?world.last_action, "tick");
        ctx = ctx.next();
    }

    SimReport {
        ticks: config.ticks,
        action_counts,
        sink: world.sink,
    }
}
