use ai_bt::{
    BtNode, BtStatus, Condition, MemSelector, MemSequence, Perform, RunAction, Selector, Sequence,
};
use ai_core::{Action, Attribute, TickContext, WorldMut, WorldState, WorldView};

#[derive(Debug, Default)]
struct Log {
    state: WorldState,
    performed: Vec<Action>,
    ticked: Vec<&'static str>,
}

impl WorldView for Log {
    fn state(&self) -> &WorldState {
        &self.state
    }
}

impl WorldMut for Log {
    fn perform(&mut self, action: Action) {
        self.performed.push(action);
    }
}

fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 0.1, 0)
}

fn fixed(status: BtStatus) -> Box<dyn BtNode<Log>> {
    Box::new(RunAction::new(move |_ctx: &TickContext, _w: &mut Log| status))
}

fn named(name: &'static str, status: BtStatus) -> Box<dyn BtNode<Log>> {
    Box::new(RunAction::new(move |_ctx: &TickContext, w: &mut Log| {
        w.ticked.push(name);
        status
    }))
}

#[test]
fn selector_falls_through_failed_condition_to_action() {
    let mut world = Log::default();
    let mut root: Selector<Log> = Selector::new(vec![
        Box::new(Condition::is_true(Attribute::CAN_SEE_ENEMY)),
        Box::new(Perform::new(Action::Wander)),
    ]);

    assert_eq!(root.tick(&ctx(0), &mut world), BtStatus::Success);
    assert_eq!(world.performed, vec![Action::Wander]);
}

#[test]
fn sequence_stops_at_first_failure() {
    let mut world = Log {
        state: WorldState::new()
            .with(Attribute::ENEMY_NEAR, true)
            .with(Attribute::IS_NEAR_WALL, false),
        ..Default::default()
    };
    let mut root: Sequence<Log> = Sequence::new(vec![
        Box::new(Condition::is_true(Attribute::ENEMY_NEAR)),
        Box::new(Condition::is_true(Attribute::IS_NEAR_WALL)),
        Box::new(Perform::new(Action::Attack)),
    ]);

    assert_eq!(root.tick(&ctx(0), &mut world), BtStatus::Failure);
    assert!(world.performed.is_empty());
}

#[test]
fn condition_compares_against_expected_value() {
    let mut world = Log::default();
    let mut absent_is_false = Condition::is_false(Attribute::new("hasJetpack"));
    let mut absent_is_not_true = Condition::is_true(Attribute::new("hasJetpack"));

    assert_eq!(
        BtNode::<Log>::tick(&mut absent_is_false, &ctx(0), &mut world),
        BtStatus::Success
    );
    assert_eq!(
        BtNode::<Log>::tick(&mut absent_is_not_true, &ctx(0), &mut world),
        BtStatus::Failure
    );
}

#[test]
fn selector_propagates_running() {
    let mut world = Log::default();
    let mut root: Selector<Log> = Selector::new(vec![
        fixed(BtStatus::Failure),
        named("long", BtStatus::Running),
        named("never", BtStatus::Success),
    ]);

    assert_eq!(root.tick(&ctx(0), &mut world), BtStatus::Running);
    assert_eq!(world.ticked, vec!["long"]);
}

#[test]
fn empty_composites_have_neutral_results() {
    let mut world = Log::default();
    let mut sel: Selector<Log> = Selector::new(Vec::new());
    let mut seq: Sequence<Log> = Sequence::new(Vec::new());

    assert_eq!(sel.tick(&ctx(0), &mut world), BtStatus::Failure);
    assert_eq!(seq.tick(&ctx(0), &mut world), BtStatus::Success);
}

#[test]
fn reactive_sequence_rechecks_earlier_children() {
    let mut world = Log::default();
    let mut root: Sequence<Log> = Sequence::new(vec![
        named("guard", BtStatus::Success),
        named("work", BtStatus::Running),
    ]);

    root.tick(&ctx(0), &mut world);
    root.tick(&ctx(1), &mut world);
    assert_eq!(world.ticked, vec!["guard", "work", "guard", "work"]);
}

#[test]
fn memory_sequence_resumes_running_child() {
    let mut world = Log::default();
    let mut root: MemSequence<Log> = MemSequence::new(vec![
        named("guard", BtStatus::Success),
        named("work", BtStatus::Running),
    ]);

    root.tick(&ctx(0), &mut world);
    root.tick(&ctx(1), &mut world);
    assert_eq!(world.ticked, vec!["guard", "work", "work"]);

    root.reset();
    root.tick(&ctx(2), &mut world);
    assert_eq!(world.ticked, vec!["guard", "work", "work", "guard", "work"]);
}

#[test]
fn memory_selector_skips_failed_children_while_running() {
    let mut world = Log::default();
    let mut root: MemSelector<Log> = MemSelector::new(vec![
        named("first", BtStatus::Failure),
        named("second", BtStatus::Running),
    ]);

    assert_eq!(root.tick(&ctx(0), &mut world), BtStatus::Running);
    assert_eq!(root.tick(&ctx(1), &mut world), BtStatus::Running);
    assert_eq!(world.ticked, vec!["first", "second", "second"]);
}

#[test]
fn status_helpers() {
    assert!(BtStatus::Success.is_success());
    assert!(BtStatus::Failure.is_failure());
    assert!(BtStatus::Running.is_running());
    assert_eq!(BtStatus::Success.invert(), BtStatus::Failure);
    assert_eq!(BtStatus::Running.invert(), BtStatus::Running);
    assert_eq!(BtStatus::from(false), BtStatus::Failure);
}
