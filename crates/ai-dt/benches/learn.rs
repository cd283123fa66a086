use ai_core::{
    Action, Attribute, DeterministicRng, SplitMix64, TrainingExample, Vocabulary, WorldState,
};
use ai_dt::{Id3Config, Id3Learner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_examples(n: usize, seed: u64) -> Vec<TrainingExample> {
    let vocab = Vocabulary::full();
    let mut rng = SplitMix64::new(seed);
    (0..n)
        .map(|_| {
            let state: WorldState = vocab
                .attributes()
                .iter()
                .map(|a| (a.clone(), rng.next_bool()))
                .collect();
            let action = if state.get(&Attribute::ENEMY_NEAR) {
                Action::FleeEnemy
            } else if state.get(&Attribute::ENERGY_LOW) {
                Action::Recharge
            } else if state.get(&Attribute::GOAL_VISIBLE) {
                Action::SeekGoal
            } else {
                Action::Wander
            };
            // Label noise keeps the tree from closing early.
            let action = if rng.next_below(20) == 0 {
                Action::Hide
            } else {
                action
            };
            TrainingExample::new(state, action)
        })
        .collect()
}

fn bench_learn(c: &mut Criterion) {
    let examples = synthetic_examples(2_000, 7);
    let attributes = Vocabulary::full().attributes().to_vec();

    c.bench_function("ai-dt/learn(examples=2000, attributes=6)", |b| {
        b.iter(|| {
            let tree = Id3Learner::new(Id3Config::default())
                .learn(black_box(&examples), black_box(&attributes));
            black_box(tree.depth());
        })
    });

    let tree = Id3Learner::default().learn(&examples, &attributes);
    c.bench_function("ai-dt/decide", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let action = tree.decide(black_box(&examples[i % examples.len()].state));
            i = i.wrapping_add(1);
            black_box(action);
        })
    });
}

criterion_group!(benches, bench_learn);
criterion_main!(benches);
