#![cfg(feature = "serde")]

use ai_core::{Action, Attribute, WorldState};
use ai_tools::{ExampleSink, VecSink};

#[test]
fn vec_sink_roundtrips_via_serde() {
    let mut sink = VecSink::default();
    sink.record(
        &WorldState::new().with(Attribute::CAN_HIDE, true),
        Action::Hide,
    );

    let json = serde_json::to_string(&sink).expect("serialize sink");
    assert!(json.contains("\"HIDE\""));

    let back: VecSink = serde_json::from_str(&json).expect("deserialize sink");
    assert_eq!(back, sink);
}
