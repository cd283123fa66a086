//! Decision trees over boolean perception facts, and ID3 induction from recorded experience.
//!
//! - [`DecisionTree::decide`] is a pure lookup from a [`ai_core::WorldState`] to an
//!   [`ai_core::Action`].
//! - [`Id3Learner`] builds a tree from labeled examples by information gain.
//! - [`learn_from_path`] wraps the learner with table loading and default-tree fallbacks.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod defaults;
pub mod id3;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod io;
pub mod policy;
pub mod source;
pub mod tree;

pub use id3::{learn, Id3Config, Id3Learner, SplitChoice, DEFAULT_GAIN_EPSILON};
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use io::TreeError;
pub use policy::DtPolicy;
pub use source::{learn_from_path, learn_from_source, LearnOptions};
pub use tree::{DecisionTree, DtNode};
