#![cfg(all(feature = "core", feature = "bt", feature = "dt", feature = "tools"))]

use ai::bt::{BtNode, BtStatus, Condition, Perform, Selector, Sequence};
use ai::core::{Action, Attribute, TickContext, WorldMut, WorldState, WorldView};
use ai::dt::defaults::player_tree;
use ai::tools::{ExampleSink, VecSink};

struct Agent {
    state: WorldState,
    sink: VecSink,
}

impl WorldView for Agent {
    fn state(&self) -> &WorldState {
        &self.state
    }
}

impl WorldMut for Agent {
    fn perform(&mut self, action: Action) {
        self.sink.record(&self.state, action);
    }
}

#[test]
fn subsystems_compose_through_the_umbrella() {
    let mut agent = Agent {
        state: WorldState::new().with(Attribute::CAN_SEE_ENEMY, true),
        sink: VecSink::default(),
    };
    let mut bt: Selector<Agent> = Selector::new(vec![
        Box::new(Sequence::<Agent>::new(vec![
            Box::new(Condition::is_true(Attribute::CAN_SEE_ENEMY)),
            Box::new(Perform::new(Action::Chase)),
        ])),
        Box::new(Perform::new(Action::Wander)),
    ]);

    assert_eq!(bt.tick(&TickContext::new(0, 0.1, 0), &mut agent), BtStatus::Success);
    assert_eq!(agent.sink.examples.len(), 1);
    assert_eq!(agent.sink.examples[0].action, Action::Chase);
    assert_eq!(player_tree().decide(&agent.state), Action::Wander);
}
