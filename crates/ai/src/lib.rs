//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! - `core`: perception snapshots, actions, deterministic RNG, policies.
//! - `dt`: decision trees and ID3 learning.
//! - `bt`: behavior trees.
//! - `tools`: experience recording and example tables.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "dt")]
#[cfg_attr(docsrs, doc(cfg(feature = "dt")))]
pub use ai_dt as dt;
