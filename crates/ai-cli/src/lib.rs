//! Library half of the `percept` binary: configuration, fact parsing and the enemy simulation.

#![forbid(unsafe_code)]

pub mod config;
pub mod enemy;
pub mod facts;
pub mod simulate;

pub use config::LearnerConfig;
pub use enemy::{enemy_tree, EnemyWorld};
pub use facts::{parse_fact, state_from_facts, FactError};
pub use simulate::{run_simulation, Perception, SimConfig, SimReport};
