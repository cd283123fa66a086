//! Learner configuration, loaded from `.percept/config.yaml`.

use std::path::{Path, PathBuf};

use ai_core::{Attribute, Vocabulary};
use ai_dt::{Id3Config, LearnOptions, DEFAULT_GAIN_EPSILON};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Location of the config file relative to the project root.
pub const CONFIG_PATH: &str = ".percept/config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Recorded example table.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Column order of the example table.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<Attribute>,

    /// Candidate split attributes; the whole vocabulary when unset.
    #[serde(default)]
    pub attributes: Option<Vec<Attribute>>,

    /// Minimum information gain for a split; `null` disables the guard.
    #[serde(default = "default_gain_epsilon")]
    pub gain_epsilon: Option<f64>,

    /// Where `learn` writes the tree and `decide` reads it.
    #[serde(default = "default_tree_path")]
    pub tree_path: PathBuf,

    /// Seed for the simulation's random streams.
    #[serde(default)]
    pub seed: u64,
}

/// Project root owning `config_path`: the parent of a `.percept/` directory, or else the
/// directory holding the file.
pub fn project_root_of(config_path: &Path) -> PathBuf {
    let dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match dir.file_name() {
        Some(name) if name == ".percept" => dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
        _ => dir.to_path_buf(),
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("training_data.csv")
}
fn default_vocabulary() -> Vec<Attribute> {
    Vocabulary::standard().attributes().to_vec()
}
fn default_gain_epsilon() -> Option<f64> {
    Some(DEFAULT_GAIN_EPSILON)
}
fn default_tree_path() -> PathBuf {
    PathBuf::from(".percept/tree.json")
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            vocabulary: default_vocabulary(),
            attributes: None,
            gain_epsilon: default_gain_epsilon(),
            tree_path: default_tree_path(),
            seed: 0,
        }
    }
}

impl LearnerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root (looks for .percept/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_PATH);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load `config_path` when given, otherwise look in `cwd`, then resolve relative paths
    /// against the project root the config belongs to.
    pub fn discover(config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let (mut config, project_root) = match config_path {
            Some(path) => (Self::load(path)?, project_root_of(path)),
            None => (Self::load_from_project(cwd)?, cwd.to_path_buf()),
        };
        config.resolve_paths(&project_root);
        Ok(config)
    }

    /// Resolve relative paths against the project root
    pub fn resolve_paths(&mut self, project_root: &Path) {
        self.data_path = project_root.join(&self.data_path);
        self.tree_path = project_root.join(&self.tree_path);
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(self.vocabulary.iter().cloned())
    }

    pub fn learn_options(&self) -> LearnOptions {
        let vocabulary = self.vocabulary();
        let attributes = self
            .attributes
            .clone()
            .unwrap_or_else(|| vocabulary.attributes().to_vec());
        LearnOptions::for_vocabulary(vocabulary)
            .with_attributes(attributes)
            .with_config(Id3Config {
                gain_epsilon: self.gain_epsilon,
            })
    }
}
