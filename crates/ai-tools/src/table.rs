//! Row codec for recorded example tables.
//!
//! A table is comma separated text. The first line is a header naming the columns and is never
//! interpreted. Every following line holds one `1`/`0` cell per vocabulary attribute (in
//! vocabulary order) and a final cell with the action ordinal:
//!
//! ```text
//! enemyNear,isNearWall,canSeeEnemy,action
//! 1,0,1,5
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ai_core::{Action, TrainingExample, Vocabulary, WorldState};
use tracing::{debug, warn};

use crate::TableError;

/// Name of the trailing action column in the header row.
pub const ACTION_COLUMN: &str = "action";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExampleTable {
    vocabulary: Vocabulary,
}

impl ExampleTable {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of cells in a well-formed row.
    pub fn width(&self) -> usize {
        self.vocabulary.len() + 1
    }

    pub fn header(&self) -> String {
        let mut cells: Vec<&str> = self
            .vocabulary
            .attributes()
            .iter()
            .map(|a| a.as_str())
            .collect();
        cells.push(ACTION_COLUMN);
        cells.join(",")
    }

    pub fn format_row(&self, state: &WorldState, action: Action) -> String {
        let mut row = String::with_capacity(self.width() * 2);
        for attr in self.vocabulary.attributes() {
            row.push(if state.get(attr) { '1' } else { '0' });
            row.push(',');
        }
        row.push_str(&action.ordinal().to_string());
        row
    }

    /// Decodes one data row. Never fails.
    ///
    /// A row with too few cells decodes to an all-false state labeled [`Action::None`]. Otherwise
    /// a flag is set only when its cell is exactly `1`, and an unreadable action cell becomes
    /// [`Action::None`]. Cells past the action column are ignored.
    pub fn parse_row(&self, line: &str) -> TrainingExample {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() < self.width() {
            debug!(
                row = line,
                cells = cells.len(),
                expected = self.width(),
                "short example row; using defaults"
            );
            return TrainingExample::new(self.vocabulary.blank_state(), Action::None);
        }

        let state = self
            .vocabulary
            .attributes()
            .iter()
            .zip(cells.iter())
            .map(|(attr, cell)| (attr.clone(), *cell == "1"))
            .collect();
        let action = Action::from_ordinal_str(cells[self.vocabulary.len()]);
        TrainingExample::new(state, action)
    }

    /// Reads every data row from `reader`, skipping the header and blank lines.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<TrainingExample>, TableError> {
        let mut examples = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index == 0 || line.trim().is_empty() {
                continue;
            }
            examples.push(self.parse_row(&line));
        }
        Ok(examples)
    }

    pub fn load(&self, path: &Path) -> Result<Vec<TrainingExample>, TableError> {
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let examples = self.read(BufReader::new(file))?;
        if examples.is_empty() {
            warn!(path = %path.display(), "example table has no data rows");
        }
        Ok(examples)
    }

    /// Writes a header followed by one row per example.
    pub fn write<W: Write>(
        &self,
        mut writer: W,
        examples: &[TrainingExample],
    ) -> Result<(), TableError> {
        writeln!(writer, "{}", self.header())?;
        for example in examples {
            writeln!(writer, "{}", self.format_row(&example.state, example.action))?;
        }
        writer.flush()?;
        Ok(())
    }
}
