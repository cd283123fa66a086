use std::fmt::{self, Write as _};

use ai_core::{Action, Attribute, WorldState};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a binary decision tree.
///
/// Every node exclusively owns its children; trees are built bottom-up and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DtNode {
    Action(Action),
    Decision {
        attribute: Attribute,
        on_true: Box<DtNode>,
        on_false: Box<DtNode>,
    },
}

impl DtNode {
    pub fn action(action: Action) -> Self {
        DtNode::Action(action)
    }

    pub fn decision(attribute: Attribute, on_true: DtNode, on_false: DtNode) -> Self {
        DtNode::Decision {
            attribute,
            on_true: Box::new(on_true),
            on_false: Box::new(on_false),
        }
    }

    /// Walks from this node to a leaf.
    ///
    /// Attributes missing from `state` take the false branch.
    pub fn decide(&self, state: &WorldState) -> Action {
        let mut node = self;
        loop {
            match node {
                DtNode::Action(action) => return *action,
                DtNode::Decision {
                    attribute,
                    on_true,
                    on_false,
                } => {
                    node = if state.get(attribute) {
                        &**on_true
                    } else {
                        &**on_false
                    };
                }
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DtNode::Action(_))
    }

    /// Number of decisions on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            DtNode::Action(_) => 0,
            DtNode::Decision {
                on_true, on_false, ..
            } => 1 + on_true.depth().max(on_false.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            DtNode::Action(_) => 1,
            DtNode::Decision {
                on_true, on_false, ..
            } => on_true.leaf_count() + on_false.leaf_count(),
        }
    }

    /// Appends the indented rendering of this subtree, starting at `depth`.
    pub fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            DtNode::Action(action) => {
                let _ = writeln!(out, "-> ACTION: {}", action.ordinal());
            }
            DtNode::Decision {
                attribute,
                on_true,
                on_false,
            } => {
                let _ = writeln!(out, "?{attribute}");
                on_true.render_into(out, depth + 1);
                on_false.render_into(out, depth + 1);
            }
        }
    }
}

/// A complete decision tree: a pure function from a [`WorldState`] to an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DecisionTree {
    root: DtNode,
}

impl DecisionTree {
    pub fn new(root: DtNode) -> Self {
        Self { root }
    }

    pub fn leaf(action: Action) -> Self {
        Self::new(DtNode::Action(action))
    }

    pub fn root(&self) -> &DtNode {
        &self.root
    }

    pub fn into_root(self) -> DtNode {
        self.root
    }

    pub fn decide(&self, state: &WorldState) -> Action {
        self.root.decide(state)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Indented text dump: `?attribute` for decisions (true branch first), `-> ACTION: <ordinal>`
    /// for leaves, two spaces per level.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.root.render_into(&mut out, 0);
        out
    }
}

impl From<DtNode> for DecisionTree {
    fn from(root: DtNode) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
