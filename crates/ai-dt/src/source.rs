use std::path::Path;

use ai_core::{Attribute, Vocabulary};
use ai_tools::{CsvSource, ExampleSource};
use tracing::{info, warn};

use crate::{defaults, DecisionTree, Id3Config, Id3Learner};

/// How to read a recorded table and what to learn from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnOptions {
    /// Column layout of the table.
    pub vocabulary: Vocabulary,
    /// Candidate split attributes, in tie-break order.
    pub attributes: Vec<Attribute>,
    pub config: Id3Config,
}

impl LearnOptions {
    /// Learn over every column of `vocabulary`.
    pub fn for_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            attributes: vocabulary.attributes().to_vec(),
            vocabulary,
            config: Id3Config::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_config(mut self, config: Id3Config) -> Self {
        self.config = config;
        self
    }
}

impl Default for LearnOptions {
    fn default() -> Self {
        Self::for_vocabulary(Vocabulary::standard())
    }
}

/// Loads examples from `source` and learns a tree. Never fails.
///
/// An unreadable source yields [`defaults::fallback_tree`]; a readable source without rows
/// yields [`defaults::idle_tree`].
pub fn learn_from_source<S>(source: &mut S, options: &LearnOptions) -> DecisionTree
where
    S: ExampleSource + ?Sized,
{
    let examples = match source.load_examples() {
        Ok(examples) => examples,
        Err(err) => {
            warn!(
                source = %source.describe(),
                error = %err,
                "could not load training data; using default tree"
            );
            return defaults::fallback_tree();
        }
    };
    if examples.is_empty() {
        warn!(source = %source.describe(), "no training data; using default tree");
        return defaults::idle_tree();
    }

    info!(
        source = %source.describe(),
        examples = examples.len(),
        attributes = options.attributes.len(),
        "learning decision tree"
    );
    Id3Learner::new(options.config).learn(&examples, &options.attributes)
}

/// [`learn_from_source`] over a comma separated table at `path`.
pub fn learn_from_path(path: &Path, options: &LearnOptions) -> DecisionTree {
    let mut source = CsvSource::new(path, options.vocabulary.clone());
    learn_from_source(&mut source, options)
}
