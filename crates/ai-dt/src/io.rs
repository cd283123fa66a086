//! JSON persistence for learned trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::DecisionTree;

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("failed to read tree from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write tree to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed tree json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_json(tree: &DecisionTree) -> Result<String, TreeError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

pub fn from_json(json: &str) -> Result<DecisionTree, TreeError> {
    Ok(serde_json::from_str(json)?)
}

/// Writes `tree` to `path`, creating parent directories as needed.
pub fn save(tree: &DecisionTree, path: &Path) -> Result<(), TreeError> {
    let json = to_json(tree)?;
    let write_err = |source| TreeError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)
}

pub fn load(path: &Path) -> Result<DecisionTree, TreeError> {
    let json = fs::read_to_string(path).map_err(|source| TreeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}
