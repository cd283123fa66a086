use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Action;

/// Name of one boolean perception predicate (e.g. `enemyNear`).
///
/// Attributes are compared by name. A name that is not part of a [`WorldState`] simply reads as
/// `false`, so trees referencing predicates a deployment does not perceive degrade instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Attribute(Cow<'static, str>);

impl Attribute {
    pub const ENEMY_NEAR: Attribute = Attribute(Cow::Borrowed("enemyNear"));
    pub const IS_NEAR_WALL: Attribute = Attribute(Cow::Borrowed("isNearWall"));
    pub const CAN_SEE_ENEMY: Attribute = Attribute(Cow::Borrowed("canSeeEnemy"));
    pub const CAN_HIDE: Attribute = Attribute(Cow::Borrowed("canHide"));
    pub const ENERGY_LOW: Attribute = Attribute(Cow::Borrowed("energyLow"));
    pub const GOAL_VISIBLE: Attribute = Attribute(Cow::Borrowed("goalVisible"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Attribute {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// The ordered set of attributes a deployment perceives.
///
/// The order is significant: it is the column order of recorded example tables and the default
/// candidate order for tree induction (which breaks gain ties by first position).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Vocabulary {
    attributes: Vec<Attribute>,
}

impl Vocabulary {
    /// Builds a vocabulary, dropping repeated names (first occurrence wins).
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        let mut out: Vec<Attribute> = Vec::new();
        for attr in attributes {
            if !out.contains(&attr) {
                out.push(attr);
            }
        }
        Self { attributes: out }
    }

    /// Layout of the recorded training table: `enemyNear, isNearWall, canSeeEnemy`.
    pub fn standard() -> Self {
        Self::new([
            Attribute::ENEMY_NEAR,
            Attribute::IS_NEAR_WALL,
            Attribute::CAN_SEE_ENEMY,
        ])
    }

    /// Every predicate with a well-known name.
    pub fn full() -> Self {
        Self::new([
            Attribute::ENEMY_NEAR,
            Attribute::IS_NEAR_WALL,
            Attribute::CAN_SEE_ENEMY,
            Attribute::CAN_HIDE,
            Attribute::ENERGY_LOW,
            Attribute::GOAL_VISIBLE,
        ])
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.as_str() == name)
    }

    /// A state carrying `false` for every attribute of this vocabulary.
    pub fn blank_state(&self) -> WorldState {
        self.attributes
            .iter()
            .map(|a| (a.clone(), false))
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Snapshot of the boolean perception facts for one decision cycle.
///
/// Built by the perception layer once per tick and read-only while deciding. Reading an attribute
/// the snapshot does not carry yields `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct WorldState {
    facts: BTreeMap<Attribute, bool>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attr: Attribute, value: bool) -> Self {
        self.set(attr, value);
        self
    }

    pub fn set(&mut self, attr: Attribute, value: bool) {
        self.facts.insert(attr, value);
    }

    /// Value of `attr`, or `false` when the snapshot does not know the name.
    ///
    /// Accepts both `&Attribute` and `&str`.
    pub fn get<Q>(&self, attr: &Q) -> bool
    where
        Attribute: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.facts.get(attr).copied().unwrap_or(false)
    }

    pub fn knows(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    /// True when every attribute of `vocabulary` has an explicit value.
    pub fn covers(&self, vocabulary: &Vocabulary) -> bool {
        vocabulary
            .attributes()
            .iter()
            .all(|a| self.facts.contains_key(a))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, bool)> + '_ {
        self.facts.iter().map(|(a, v)| (a, *v))
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FromIterator<(Attribute, bool)> for WorldState {
    fn from_iter<I: IntoIterator<Item = (Attribute, bool)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (attr, value) in &self.facts {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}:{}", attr, if *value { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

/// Read-only access to what an agent currently perceives.
///
/// The core does not prescribe how perception is computed; collaborators rebuild the snapshot
/// each tick and expose it through this trait.
pub trait WorldView {
    fn state(&self) -> &WorldState;
}

/// Effect sink: carries out actions chosen by a policy (movement, animation, recording, ...).
pub trait WorldMut: WorldView {
    fn perform(&mut self, action: Action);
}
