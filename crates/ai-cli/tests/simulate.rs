use ai_bt::BtStatus;
use ai_cli::enemy::{enemy_tree, DANCE_SECONDS};
use ai_cli::{run_simulation, EnemyWorld, Perception, SimConfig};
use ai_core::{Action, Attribute, TickContext, Vocabulary, WorldState};
use ai_dt::{learn_from_source, DtNode, LearnOptions};
use ai_tools::{CsvRecorder, ExampleSink, NullSink, VecSink};

/// Writer on a device with no space left.
struct DeviceFull;

impl std::io::Write for DeviceFull {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn sim(ticks: u64, seed: u64) -> SimConfig {
    SimConfig {
        ticks,
        seed,
        ..SimConfig::default()
    }
}

#[test]
fn records_one_example_per_tick() {
    let report = run_simulation(&sim(500, 7), &Vocabulary::standard(), VecSink::default());

    assert_eq!(report.sink.examples.len(), 500);
    assert_eq!(report.action_counts.values().sum::<u64>(), 500);
    for example in &report.sink.examples {
        if example.state.get(&Attribute::CAN_SEE_ENEMY) {
            assert_eq!(example.action, Action::Chase);
        } else {
            assert_ne!(example.action, Action::Chase);
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let a = run_simulation(&sim(300, 11), &Vocabulary::standard(), VecSink::default());
    let b = run_simulation(&sim(300, 11), &Vocabulary::standard(), VecSink::default());
    assert_eq!(a.sink, b.sink);
}

#[test]
fn learning_from_the_run_recovers_the_chase_rule() {
    let mut report = run_simulation(&sim(2_000, 3), &Vocabulary::standard(), VecSink::default());
    assert!(report.count(Action::Chase) > 0);
    assert!(report.count(Action::Wander) > 0);

    let tree = learn_from_source(&mut report.sink, &LearnOptions::default());
    let DtNode::Decision {
        attribute, on_true, ..
    } = tree.root()
    else {
        panic!("expected a split, got {tree}");
    };
    assert_eq!(attribute, &Attribute::CAN_SEE_ENEMY);
    assert_eq!(**on_true, DtNode::action(Action::Chase));
}

#[test]
fn run_writes_a_loadable_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("training_data.csv");
    let recorder = CsvRecorder::create(&path, Vocabulary::standard()).expect("create");

    let report = run_simulation(&sim(50, 1), &Vocabulary::standard(), recorder);
    assert_eq!(report.sink.rows(), 50);
    report.sink.into_inner().expect("flush");

    let text = std::fs::read_to_string(&path).expect("read");
    assert_eq!(text.lines().count(), 51);
    assert!(text.starts_with("enemyNear,isNearWall,canSeeEnemy,action\n"));
}

#[test]
fn a_started_dance_runs_its_course() {
    let mut tree = enemy_tree::<NullSink>();
    let mut world = EnemyWorld::new(NullSink);
    world.dance_timer = DANCE_SECONDS;

    let mut ctx = TickContext::new(0, 0.5, 0);
    let mut danced = 0;
    while world.is_dancing() {
        assert_eq!(tree.tick(&ctx, &mut world), BtStatus::Success);
        assert_eq!(world.last_action, Some(Action::Dance));
        danced += 1;
        ctx = ctx.next();
    }
    assert_eq!(danced, 3);
}

#[test]
fn seeing_the_enemy_interrupts_a_dance() {
    let mut tree = enemy_tree::<VecSink>();
    let mut world = EnemyWorld::new(VecSink::default());
    world.dance_timer = DANCE_SECONDS;
    world.state = WorldState::new().with(Attribute::CAN_SEE_ENEMY, true);

    tree.tick(&TickContext::new(0, 0.1, 0), &mut world);

    assert_eq!(world.last_action, Some(Action::Chase));
    assert!(!world.is_dancing());
    assert_eq!(world.sink.examples.len(), 1);
}

#[test]
fn perception_drifts_but_keeps_its_vocabulary() {
    let mut perception = Perception::new(&Vocabulary::standard(), 9).with_flip_chance(0.5);
    let mut changed = false;
    let mut previous = perception.next_state().clone();
    for _ in 0..20 {
        let next = perception.next_state().clone();
        assert!(next.covers(&Vocabulary::standard()));
        changed |= next != previous;
        previous = next;
    }
    assert!(changed);
}

#[test]
fn unwritable_table_is_reported_after_the_run() {
    let recorder = CsvRecorder::new(
        std::io::BufWriter::new(DeviceFull),
        Vocabulary::standard(),
    )
    .expect("header is buffered");
    let sink: Box<dyn ExampleSink> = Box::new(recorder);

    let mut report = run_simulation(&sim(10, 0), &Vocabulary::standard(), sink);
    assert_eq!(report.ticks, 10);
    assert!(report.sink.flush().is_err());
}
