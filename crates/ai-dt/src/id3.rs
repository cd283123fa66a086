//! ID3 induction of decision trees from labeled examples.
//!
//! The learner splits on the attribute with the highest information gain, removes it from the
//! candidate list for both subtrees, and recurses until a subset is pure, no candidates remain,
//! or a split would not separate anything.
//!
//! Tie-breaking is positional so results are reproducible:
//! - among attributes with equal gain, the earliest in the candidate list wins;
//! - among actions with equal counts (majority votes), the lowest ordinal wins.

use std::borrow::Borrow;

use ai_core::{Action, Attribute, TrainingExample};
use tracing::{debug, warn};

use crate::{DecisionTree, DtNode};

/// Best-gain threshold at or below which a subset is closed with a majority leaf.
pub const DEFAULT_GAIN_EPSILON: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Id3Config {
    /// When set, a subset whose best gain is `<=` this value becomes a majority leaf instead of
    /// being split. `None` keeps only the empty-branch guard.
    pub gain_epsilon: Option<f64>,
}

impl Default for Id3Config {
    fn default() -> Self {
        Self {
            gain_epsilon: Some(DEFAULT_GAIN_EPSILON),
        }
    }
}

impl Id3Config {
    /// Split whenever both branches are non-empty, however small the gain.
    pub fn exhaustive() -> Self {
        Self { gain_epsilon: None }
    }
}

/// Attribute chosen for a split and the gain it achieves.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitChoice {
    pub attribute: Attribute,
    pub gain: f64,
}

fn as_example<E: Borrow<TrainingExample>>(example: &E) -> &TrainingExample {
    example.borrow()
}

/// Occurrences of each action, indexed by ordinal.
pub fn action_counts<E: Borrow<TrainingExample>>(examples: &[E]) -> [usize; Action::COUNT] {
    let mut counts = [0usize; Action::COUNT];
    for ex in examples {
        counts[as_example(ex).action.ordinal() as usize] += 1;
    }
    counts
}

/// Shannon entropy (bits) of the action distribution. An empty set has entropy 0.
pub fn entropy<E: Borrow<TrainingExample>>(examples: &[E]) -> f64 {
    entropy_of_counts(&action_counts(examples), examples.len())
}

fn entropy_of_counts(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Splits `examples` by the value of `attribute` into `(true, false)` subsets, keeping order.
pub fn partition<'a, E: Borrow<TrainingExample>>(
    examples: &'a [E],
    attribute: &Attribute,
) -> (Vec<&'a TrainingExample>, Vec<&'a TrainingExample>) {
    examples
        .iter()
        .map(as_example)
        .partition(|ex| ex.state.get(attribute))
}

/// Weighted entropy left after splitting on `attribute`.
pub fn remainder<E: Borrow<TrainingExample>>(examples: &[E], attribute: &Attribute) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let (on_true, on_false) = partition(examples, attribute);
    let total = examples.len() as f64;
    (on_true.len() as f64 / total) * entropy(&on_true)
        + (on_false.len() as f64 / total) * entropy(&on_false)
}

pub fn information_gain<E: Borrow<TrainingExample>>(examples: &[E], attribute: &Attribute) -> f64 {
    entropy(examples) - remainder(examples, attribute)
}

/// Highest-gain attribute among `attributes`; `None` only when `attributes` is empty.
///
/// Comparison is strict against a running maximum that starts below any possible gain, so the
/// first of several equally good attributes is chosen.
pub fn best_split<E: Borrow<TrainingExample>>(
    examples: &[E],
    attributes: &[Attribute],
) -> Option<SplitChoice> {
    let base = entropy(examples);
    let mut best: Option<SplitChoice> = None;
    let mut max_gain = -1.0;
    for attribute in attributes {
        let gain = base - remainder(examples, attribute);
        if gain > max_gain {
            max_gain = gain;
            best = Some(SplitChoice {
                attribute: attribute.clone(),
                gain,
            });
        }
    }
    best
}

/// Most frequent action. Ties go to the lowest ordinal; an empty set votes [`Action::None`].
pub fn majority<E: Borrow<TrainingExample>>(examples: &[E]) -> Action {
    let counts = action_counts(examples);
    let mut best = Action::None;
    let mut max_count = 0usize;
    for (action, &count) in Action::ALL.iter().zip(counts.iter()) {
        if count > max_count {
            max_count = count;
            best = *action;
        }
    }
    best
}

fn uniform_action<E: Borrow<TrainingExample>>(examples: &[E]) -> Option<Action> {
    let (first, rest) = examples.split_first()?;
    let action = as_example(first).action;
    rest.iter()
        .all(|ex| as_example(ex).action == action)
        .then_some(action)
}

/// ID3 tree builder.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Id3Learner {
    pub config: Id3Config,
}

impl Id3Learner {
    pub fn new(config: Id3Config) -> Self {
        Self { config }
    }

    /// Learns a tree predicting `action` from the given candidate `attributes`.
    ///
    /// An empty example set yields the degenerate tree `Action(NONE)`.
    pub fn learn(&self, examples: &[TrainingExample], attributes: &[Attribute]) -> DecisionTree {
        if examples.is_empty() {
            warn!("no training examples; learned tree is a NONE leaf");
            return DecisionTree::leaf(Action::None);
        }
        let refs: Vec<&TrainingExample> = examples.iter().collect();
        let root = self.build(&refs, attributes, 0);
        debug!(
            examples = examples.len(),
            depth = root.depth(),
            leaves = root.leaf_count(),
            "learned decision tree"
        );
        DecisionTree::new(root)
    }

    fn build(&self, examples: &[&TrainingExample], attributes: &[Attribute], depth: usize) -> DtNode {
        if examples.is_empty() {
            return DtNode::Action(Action::None);
        }
        if let Some(action) = uniform_action(examples) {
            return DtNode::Action(action);
        }
        let Some(choice) = best_split(examples, attributes) else {
            return DtNode::Action(majority(examples));
        };

        if let Some(epsilon) = self.config.gain_epsilon {
            if choice.gain <= epsilon {
                debug!(
                    depth,
                    attribute = %choice.attribute,
                    gain = choice.gain,
                    "best gain below epsilon; closing with majority leaf"
                );
                return DtNode::Action(majority(examples));
            }
        }

        let (on_true, on_false) = partition(examples, &choice.attribute);
        if on_true.is_empty() || on_false.is_empty() {
            debug!(
                depth,
                attribute = %choice.attribute,
                "split leaves a branch empty; closing with majority leaf"
            );
            return DtNode::Action(majority(examples));
        }

        debug!(
            depth,
            attribute = %choice.attribute,
            gain = choice.gain,
            on_true = on_true.len(),
            on_false = on_false.len(),
            "split"
        );

        let remaining: Vec<Attribute> = attributes
            .iter()
            .filter(|a| **a != choice.attribute)
            .cloned()
            .collect();
        let true_branch = self.build(&on_true, &remaining, depth + 1);
        let false_branch = self.build(&on_false, &remaining, depth + 1);
        DtNode::decision(choice.attribute, true_branch, false_branch)
    }
}

/// [`Id3Learner::learn`] with the default configuration.
pub fn learn(examples: &[TrainingExample], attributes: &[Attribute]) -> DecisionTree {
    Id3Learner::default().learn(examples, attributes)
}
