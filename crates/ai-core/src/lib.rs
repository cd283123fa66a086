//! Deterministic, engine-agnostic primitives for simulated agents.
//!
//! Perception arrives as a [`WorldState`] of named boolean facts, decisions leave as an
//! [`Action`] label, and a [`Policy`] ties the two together once per think tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod brain;
pub mod example;
pub mod policy;
pub mod rng;
pub mod tick;
pub mod world;

pub use action::{Action, ParseActionError};
pub use brain::{Brain, BrainConfig};
pub use example::TrainingExample;
pub use policy::Policy;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use world::{Attribute, Vocabulary, WorldMut, WorldState, WorldView};
