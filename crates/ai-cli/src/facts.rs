//! `name=bool` perception facts given on the command line.

use ai_core::{Attribute, Vocabulary, WorldState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    #[error("expected name=value, got {0:?}")]
    MissingValue(String),
    #[error("empty attribute name in {0:?}")]
    EmptyName(String),
    #[error("{value:?} is not a boolean (use true/false, 1/0, yes/no)")]
    NotBoolean { value: String },
}

/// Parses `enemyNear=true`, `canSeeEnemy=0` and similar.
pub fn parse_fact(raw: &str) -> Result<(Attribute, bool), FactError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| FactError::MissingValue(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(FactError::EmptyName(raw.to_string()));
    }
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => true,
        "0" | "false" | "f" | "no" | "n" => false,
        _ => {
            return Err(FactError::NotBoolean {
                value: value.to_string(),
            })
        }
    };
    Ok((Attribute::from(name.to_string()), value))
}

/// A state with every vocabulary attribute set to `false`, then overridden by `facts`.
///
/// Facts outside the vocabulary are kept; decision trees read them like any other attribute.
pub fn state_from_facts(vocabulary: &Vocabulary, facts: &[(Attribute, bool)]) -> WorldState {
    let mut state = vocabulary.blank_state();
    for (attribute, value) in facts {
        state.set(attribute.clone(), *value);
    }
    state
}
