use std::path::{Path, PathBuf};

use ai_core::{TrainingExample, Vocabulary};

use crate::{ExampleTable, TableError, VecSink};

/// Somewhere a batch of recorded examples can be loaded from.
pub trait ExampleSource {
    fn load_examples(&mut self) -> Result<Vec<TrainingExample>, TableError>;

    /// Human readable origin used in diagnostics.
    fn describe(&self) -> String;
}

/// An example table on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    table: ExampleTable,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, vocabulary: Vocabulary) -> Self {
        Self {
            path: path.into(),
            table: ExampleTable::new(vocabulary),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExampleSource for CsvSource {
    fn load_examples(&mut self) -> Result<Vec<TrainingExample>, TableError> {
        self.table.load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl ExampleSource for VecSink {
    fn load_examples(&mut self) -> Result<Vec<TrainingExample>, TableError> {
        Ok(self.examples.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} examples)", self.examples.len())
    }
}
