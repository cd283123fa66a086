//! Hand-authored trees.

use ai_core::{Action, Attribute};

use crate::{DecisionTree, DtNode};

/// Prey behavior: flee a nearby enemy, otherwise move off walls, otherwise wander.
///
/// ```text
/// ?enemyNear
///   -> FLEE_ENEMY
///   ?isNearWall
///     -> SEEK_CENTER
///     -> WANDER
/// ```
pub fn player_tree() -> DecisionTree {
    DecisionTree::new(DtNode::decision(
        Attribute::ENEMY_NEAR,
        DtNode::action(Action::FleeEnemy),
        DtNode::decision(
            Attribute::IS_NEAR_WALL,
            DtNode::action(Action::SeekCenter),
            DtNode::action(Action::Wander),
        ),
    ))
}

/// Used when no training data can be read: chase what is visible, otherwise search the middle.
pub fn fallback_tree() -> DecisionTree {
    DecisionTree::new(DtNode::decision(
        Attribute::CAN_SEE_ENEMY,
        DtNode::action(Action::Chase),
        DtNode::action(Action::SeekCenter),
    ))
}

/// Used when the training data exists but holds no rows.
pub fn idle_tree() -> DecisionTree {
    DecisionTree::leaf(Action::Wander)
}
