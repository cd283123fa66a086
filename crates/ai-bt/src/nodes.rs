use ai_core::rng::shuffle;
use ai_core::{Action, Attribute, TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus};

/// Ticks children in order every tick; the first child that does not fail decides the result.
///
/// Earlier children are re-evaluated each tick, so a higher-priority branch preempts a running
/// lower-priority one. The preempted child is reset.
pub struct ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    running: Option<usize>,
}

impl<W> ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            children,
            running: None,
        }
    }
}

impl<W> BtNode<W> for ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx, world) {
                BtStatus::Failure => continue,
                BtStatus::Success => {
                    self.reset();
                    return BtStatus::Success;
                }
                BtStatus::Running => {
                    track_running(&mut self.children, &mut self.running, i);
                    return BtStatus::Running;
                }
            }
        }

        self.reset();
        BtStatus::Failure
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Ticks children in order every tick; the first child that does not succeed decides the result.
pub struct ReactiveSequence<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    running: Option<usize>,
}

impl<W> ReactiveSequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            children,
            running: None,
        }
    }
}

impl<W> BtNode<W> for ReactiveSequence<W>
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx, world) {
                BtStatus::Failure => {
                    self.reset();
                    return BtStatus::Failure;
                }
                BtStatus::Running => {
                    track_running(&mut self.children, &mut self.running, i);
                    return BtStatus::Running;
                }
                BtStatus::Success => continue,
            }
        }

        self.reset();
        BtStatus::Success
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

fn track_running<W>(children: &mut [Box<dyn BtNode<W>>], running: &mut Option<usize>, now: usize)
where
    W: WorldMut + 'static,
{
    if *running != Some(now) {
        if let Some(prev) = *running {
            children[prev].reset();
        }
        *running = Some(now);
    }
}

/// Sequence with memory: a running child is resumed on the next tick without re-checking the
/// children before it.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    index: usize,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self { children, index: 0 }
    }
}

impl<W> BtNode<W> for Sequence<W>
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        while self.index < self.children.len() {
            match self.children[self.index].tick(ctx, world) {
                BtStatus::Running => return BtStatus::Running,
                BtStatus::Failure => {
                    self.reset();
                    return BtStatus::Failure;
                }
                BtStatus::Success => self.index += 1,
            }
        }

        self.reset();
        BtStatus::Success
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Selector with memory: a running child is resumed on the next tick.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    index: usize,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self { children, index: 0 }
    }
}

impl<W> BtNode<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        while self.index < self.children.len() {
            match self.children[self.index].tick(ctx, world) {
                BtStatus::Running => return BtStatus::Running,
                BtStatus::Success => {
                    self.reset();
                    return BtStatus::Success;
                }
                BtStatus::Failure => self.index += 1,
            }
        }

        self.reset();
        BtStatus::Failure
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Reactive selector that visits its children in a fresh random order every tick.
///
/// The order is drawn from `ctx.rng_for_stream(stream)`, so it depends only on the seed, the tick
/// and the stream id, and replays exactly.
pub struct RandomSelector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    stream: u64,
    order: Vec<usize>,
    running: Option<usize>,
}

impl<W> RandomSelector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(stream: u64, children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            order: Vec::with_capacity(children.len()),
            children,
            stream,
            running: None,
        }
    }

    /// Visit order drawn on the most recent tick.
    pub fn last_order(&self) -> &[usize] {
        &self.order
    }
}

impl<W> BtNode<W> for RandomSelector<W>
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        let mut rng = ctx.rng_for_stream(self.stream);
        self.order.clear();
        self.order.extend(0..self.children.len());
        shuffle(&mut rng, &mut self.order);

        for k in 0..self.order.len() {
            let i = self.order[k];
            match self.children[i].tick(ctx, world) {
                BtStatus::Failure => continue,
                BtStatus::Success => {
                    self.running = None;
                    for c in self.children.iter_mut() {
                        c.reset();
                    }
                    return BtStatus::Success;
                }
                BtStatus::Running => {
                    track_running(&mut self.children, &mut self.running, i);
                    return BtStatus::Running;
                }
            }
        }

        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
        BtStatus::Failure
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Succeeds iff the perceived value of `attribute` equals `expected`.
///
/// Attributes missing from the world state read as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    attribute: Attribute,
    expected: bool,
}

impl Condition {
    pub fn new(attribute: Attribute, expected: bool) -> Self {
        Self {
            attribute,
            expected,
        }
    }

    pub fn is_true(attribute: Attribute) -> Self {
        Self::new(attribute, true)
    }

    pub fn is_false(attribute: Attribute) -> Self {
        Self::new(attribute, false)
    }
}

impl<W> BtNode<W> for Condition
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, _ctx: &TickContext, world: &mut W) -> BtStatus {
        BtStatus::from(world.state().get(&self.attribute) == self.expected)
    }

    fn reset(&mut self) {}
}

/// Condition over arbitrary world data (timers, counters, ...).
pub struct Predicate<F> {
    cond: F,
}

impl<F> Predicate<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W> BtNode<W> for Predicate<F>
where
    F: FnMut(&TickContext, &mut W) -> bool + 'static,
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        BtStatus::from((self.cond)(ctx, world))
    }

    fn reset(&mut self) {}
}

/// Leaf that hands control to a caller-supplied effect and reports its status.
pub struct RunAction<F> {
    run: F,
}

impl<F> RunAction<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F, W> BtNode<W> for RunAction<F>
where
    F: FnMut(&TickContext, &mut W) -> BtStatus + 'static,
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        (self.run)(ctx, world)
    }

    fn reset(&mut self) {}
}

/// Leaf that dispatches a fixed [`Action`] through [`WorldMut::perform`] and succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perform {
    action: Action,
}

impl Perform {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl<W> BtNode<W> for Perform
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, _ctx: &TickContext, world: &mut W) -> BtStatus {
        world.perform(self.action);
        BtStatus::Success
    }

    fn reset(&mut self) {}
}
