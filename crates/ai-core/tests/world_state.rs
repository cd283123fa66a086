use ai_core::{Attribute, Vocabulary, WorldState};

#[test]
fn unknown_attribute_reads_false() {
    let state = WorldState::new().with(Attribute::ENEMY_NEAR, true);

    assert!(state.get(&Attribute::ENEMY_NEAR));
    assert!(state.get("enemyNear"));
    assert!(!state.get("energyLow"));
    assert!(!state.get(&Attribute::new("addedInALaterBuild")));
}

#[test]
fn blank_state_covers_vocabulary_with_false() {
    let vocab = Vocabulary::standard();
    let state = vocab.blank_state();

    assert!(state.covers(&vocab));
    assert_eq!(state.len(), 3);
    assert!(state.iter().all(|(_, v)| !v));
    assert!(!state.covers(&Vocabulary::full()));
}

#[test]
fn vocabulary_keeps_first_occurrence_order() {
    let vocab = Vocabulary::new([
        Attribute::CAN_SEE_ENEMY,
        Attribute::ENEMY_NEAR,
        Attribute::CAN_SEE_ENEMY,
    ]);

    assert_eq!(
        vocab.attributes(),
        &[Attribute::CAN_SEE_ENEMY, Attribute::ENEMY_NEAR]
    );
    assert_eq!(vocab.position("enemyNear"), Some(1));
    assert!(!vocab.contains("isNearWall"));
}

#[test]
fn owned_and_borrowed_names_are_the_same_attribute() {
    let owned = Attribute::from(String::from("canHide"));
    assert_eq!(owned, Attribute::CAN_HIDE);

    let state = WorldState::new().with(owned, true);
    assert!(state.get(&Attribute::CAN_HIDE));
}

#[test]
fn display_lists_facts_in_name_order() {
    let state = WorldState::new()
        .with(Attribute::IS_NEAR_WALL, false)
        .with(Attribute::ENEMY_NEAR, true);

    assert_eq!(state.to_string(), "enemyNear:T isNearWall:F");
}

#[cfg(feature = "serde")]
#[test]
fn world_state_serializes_as_name_map() {
    let state = WorldState::new()
        .with(Attribute::ENEMY_NEAR, true)
        .with(Attribute::CAN_SEE_ENEMY, false);

    let json = serde_json::to_string(&state).expect("serialize state");
    assert_eq!(json, r#"{"canSeeEnemy":false,"enemyNear":true}"#);

    let back: WorldState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(back, state);
}
