use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behavior label chosen by a decision procedure.
///
/// Actions carry no behavior of their own; the actuation layer maps them to effects. The ordinal
/// of each variant is part of the recorded example-table format and must not be reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Action {
    Wander,
    FleeEnemy,
    SeekCenter,
    Attack,
    Hide,
    Chase,
    /// No decision; also the fallback for unreadable recorded labels.
    #[default]
    None,
    Dance,
    SeekGoal,
    Recharge,
}

impl Action {
    /// All actions in ordinal order.
    pub const ALL: [Action; 10] = [
        Action::Wander,
        Action::FleeEnemy,
        Action::SeekCenter,
        Action::Attack,
        Action::Hide,
        Action::Chase,
        Action::None,
        Action::Dance,
        Action::SeekGoal,
        Action::Recharge,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn ordinal(self) -> u32 {
        match self {
            Action::Wander => 0,
            Action::FleeEnemy => 1,
            Action::SeekCenter => 2,
            Action::Attack => 3,
            Action::Hide => 4,
            Action::Chase => 5,
            Action::None => 6,
            Action::Dance => 7,
            Action::SeekGoal => 8,
            Action::Recharge => 9,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Action> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Lenient decoding used by table readers: anything unparsable or out of range is `None`.
    ///
    /// The whole trimmed cell must be a number; a numeric prefix such as `5abc` is rejected
    /// rather than read as `5`, so a corrupted label never masquerades as a real action.
    pub fn from_ordinal_str(cell: &str) -> Action {
        cell.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_ordinal)
            .unwrap_or(Action::None)
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Wander => "WANDER",
            Action::FleeEnemy => "FLEE_ENEMY",
            Action::SeekCenter => "SEEK_CENTER",
            Action::Attack => "ATTACK",
            Action::Hide => "HIDE",
            Action::Chase => "CHASE",
            Action::None => "NONE",
            Action::Dance => "DANCE",
            Action::SeekGoal => "SEEK_GOAL",
            Action::Recharge => "RECHARGE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `FLEE_ENEMY`, `flee_enemy`, `flee-enemy` or the ordinal (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<u32>() {
            return Self::from_ordinal(ordinal).ok_or_else(|| ParseActionError(s.to_string()));
        }
        let normalized = trimmed.to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}
