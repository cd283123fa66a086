use ai_core::rng::{shuffle, DeterministicRng};
use ai_core::{SplitMix64, TickContext};

#[test]
fn same_seed_same_sequence() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = SplitMix64::new(1);
    for bound in 1..50u32 {
        for _ in 0..20 {
            assert!(rng.next_below(bound) < bound);
        }
    }
    assert_eq!(rng.next_below(0), 0);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = SplitMix64::new(99);
    let mut items: Vec<u32> = (0..10).collect();
    shuffle(&mut rng, &mut items);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..10).collect::<Vec<_>>());
}

#[test]
fn tick_streams_replay_and_differ() {
    let ctx = TickContext::new(3, 0.1, 42);

    let mut a = ctx.rng_for_stream(1);
    let mut b = ctx.rng_for_stream(1);
    assert_eq!(a.next_u64(), b.next_u64());

    let mut other_stream = ctx.rng_for_stream(2);
    let mut other_tick = ctx.next().rng_for_stream(1);
    let first = ctx.rng_for_stream(1).next_u64();
    assert_ne!(first, other_stream.next_u64());
    assert_ne!(first, other_tick.next_u64());
}
