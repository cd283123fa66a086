use ai_cli::{parse_fact, state_from_facts, FactError};
use ai_core::{Attribute, Vocabulary};

#[test]
fn parses_common_boolean_spellings() {
    assert_eq!(parse_fact("enemyNear=true"), Ok((Attribute::ENEMY_NEAR, true)));
    assert_eq!(parse_fact("enemyNear=0"), Ok((Attribute::ENEMY_NEAR, false)));
    assert_eq!(parse_fact(" canSeeEnemy = Yes "), Ok((Attribute::CAN_SEE_ENEMY, true)));
}

#[test]
fn rejects_malformed_facts() {
    assert!(matches!(parse_fact("enemyNear"), Err(FactError::MissingValue(_))));
    assert!(matches!(parse_fact("=1"), Err(FactError::EmptyName(_))));
    assert!(matches!(parse_fact("enemyNear=maybe"), Err(FactError::NotBoolean { .. })));
}

#[test]
fn facts_override_a_blank_vocabulary_state() {
    let state = state_from_facts(
        &Vocabulary::standard(),
        &[
            (Attribute::CAN_SEE_ENEMY, true),
            (Attribute::new("hasJetpack"), true),
        ],
    );

    assert_eq!(state.len(), 4);
    assert!(state.knows("enemyNear"));
    assert!(!state.get(&Attribute::ENEMY_NEAR));
    assert!(state.get(&Attribute::CAN_SEE_ENEMY));
    assert!(state.get("hasJetpack"));
}
