//! The enemy behavior tree: chase what is visible, break into the occasional dance, otherwise
//! wander. Every performed action is recorded as a training example.

use ai_bt::{BtNode, BtStatus, Condition, Perform, Predicate, RunAction, Selector, Sequence};
use ai_core::{Action, Attribute, DeterministicRng, TickContext, WorldMut, WorldState, WorldView};
use ai_tools::ExampleSink;

/// How long a dance lasts once started.
pub const DANCE_SECONDS: f32 = 1.5;
/// Per-tick probability of starting a dance when nothing else is going on.
pub const DANCE_CHANCE: f32 = 0.005;
/// Random stream reserved for the dance roll.
pub const DANCE_STREAM: u64 = 0xDA9CE;

/// Everything the enemy tree reads and writes during a tick.
pub struct EnemyWorld<S> {
    pub state: WorldState,
    /// Seconds of dancing left; positive while a dance is in progress.
    pub dance_timer: f32,
    pub sink: S,
    pub last_action: Option<Action>,
}

impl<S: ExampleSink> EnemyWorld<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: WorldState::new(),
            dance_timer: 0.0,
            sink,
            last_action: None,
        }
    }

    pub fn is_dancing(&self) -> bool {
        self.dance_timer > 0.0
    }
}

impl<S> WorldView for EnemyWorld<S> {
    fn state(&self) -> &WorldState {
        &self.state
    }
}

impl<S: ExampleSink> WorldMut for EnemyWorld<S> {
    fn perform(&mut self, action: Action) {
        self.sink.record(&self.state, action);
        self.last_action = Some(action);
    }
}

/// ```text
/// Selector
///   Sequence
///     canSeeEnemy?
///     Chase       (cancels any dance)
///   Sequence
///     ShouldDance (dance in progress, or start one by chance)
///     Dance       (burns dance time)
///   Wander
/// ```
pub fn enemy_tree<S>() -> Box<dyn BtNode<EnemyWorld<S>>>
where
    S: ExampleSink + 'static,
{
    let chase = RunAction::new(|_ctx: &TickContext, world: &mut EnemyWorld<S>| {
        world.dance_timer = 0.0;
        world.perform(Action::Chase);
        BtStatus::Success
    });

    let should_dance = Predicate::new(|ctx: &TickContext, world: &mut EnemyWorld<S>| {
        if world.is_dancing() {
            return true;
        }
        if ctx.rng_for_stream(DANCE_STREAM).next_f32_unit() < DANCE_CHANCE {
            world.dance_timer = DANCE_SECONDS;
            return true;
        }
        false
    });

    let dance = RunAction::new(|ctx: &TickContext, world: &mut EnemyWorld<S>| {
        world.dance_timer -= ctx.dt_seconds;
        world.perform(Action::Dance);
        BtStatus::Success
    });

    Box::new(Selector::<EnemyWorld<S>>::new(vec![
        Box::new(Sequence::<EnemyWorld<S>>::new(vec![
            Box::new(Condition::is_true(Attribute::CAN_SEE_ENEMY)),
            Box::new(chase),
        ])),
        Box::new(Sequence::<EnemyWorld<S>>::new(vec![
            Box::new(should_dance),
            Box::new(dance),
        ])),
        Box::new(Perform::new(Action::Wander)),
    ]))
}
