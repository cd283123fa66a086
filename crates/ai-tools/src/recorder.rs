use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use ai_core::{Action, TrainingExample, Vocabulary, WorldState};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ExampleTable, TableError};

/// Append-only destination for experience.
///
/// Recording sits on the hot path of a simulation tick, so `record` swallows failures rather than
/// interrupting the agent. They surface from [`ExampleSink::flush`], which callers run once the
/// recording is over.
pub trait ExampleSink {
    fn record(&mut self, state: &WorldState, action: Action);

    /// Pushes buffered rows to their destination and reports any failure seen since the
    /// previous flush.
    fn flush(&mut self) -> Result<(), TableError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NullSink;

impl ExampleSink for NullSink {
    fn record(&mut self, _state: &WorldState, _action: Action) {}
}

/// Keeps examples in memory, in recording order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VecSink {
    pub examples: Vec<TrainingExample>,
}

impl ExampleSink for VecSink {
    fn record(&mut self, state: &WorldState, action: Action) {
        self.examples
            .push(TrainingExample::new(state.clone(), action));
    }
}

impl<S: ExampleSink + ?Sized> ExampleSink for Box<S> {
    fn record(&mut self, state: &WorldState, action: Action) {
        (**self).record(state, action);
    }

    fn flush(&mut self) -> Result<(), TableError> {
        (**self).flush()
    }
}

impl<S: ExampleSink + ?Sized> ExampleSink for &mut S {
    fn record(&mut self, state: &WorldState, action: Action) {
        (**self).record(state, action);
    }

    fn flush(&mut self) -> Result<(), TableError> {
        (**self).flush()
    }
}

/// Streams examples into a comma separated table.
///
/// The first write error is logged and disables the recorder; later calls are no-ops. The error
/// is kept and returned by the next [`CsvRecorder::flush`] or [`CsvRecorder::into_inner`].
pub struct CsvRecorder<W: Write> {
    writer: W,
    table: ExampleTable,
    rows: u64,
    failed: bool,
    error: Option<io::Error>,
}

impl<W: Write> CsvRecorder<W> {
    /// Wraps `writer` and emits the header row.
    pub fn new(mut writer: W, vocabulary: Vocabulary) -> Result<Self, TableError> {
        let table = ExampleTable::new(vocabulary);
        writeln!(writer, "{}", table.header())?;
        Ok(Self::headless(writer, table))
    }

    fn headless(writer: W, table: ExampleTable) -> Self {
        Self {
            writer,
            table,
            rows: 0,
            failed: false,
            error: None,
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn flush(&mut self) -> Result<(), TableError> {
        if let Some(err) = self.error.take() {
            return Err(TableError::Io(err));
        }
        if self.failed {
            return Err(TableError::Disabled { rows: self.rows });
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(mut self) -> Result<W, TableError> {
        CsvRecorder::flush(&mut self)?;
        Ok(self.writer)
    }
}

impl CsvRecorder<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the header.
    pub fn create(path: &Path, vocabulary: Vocabulary) -> Result<Self, TableError> {
        let file = File::create(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file), vocabulary)
    }

    /// Opens `path` for appending, writing a header only when the file is new or empty.
    ///
    /// A non-empty file whose last line is unterminated gets a newline first, so the new rows
    /// start on a line of their own.
    pub fn append(path: &Path, vocabulary: Vocabulary) -> Result<Self, TableError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)
            .map_err(|source| TableError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Self::new(BufWriter::new(file), vocabulary);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        let mut writer = BufWriter::new(file);
        if last[0] != b'\n' {
            writer.write_all(b"\n")?;
        }
        Ok(Self::headless(writer, ExampleTable::new(vocabulary)))
    }
}

impl<W: Write> ExampleSink for CsvRecorder<W> {
    fn record(&mut self, state: &WorldState, action: Action) {
        if self.failed {
            return;
        }
        let row = self.table.format_row(state, action);
        if let Err(err) = writeln!(self.writer, "{row}") {
            warn!(error = %err, "example recorder failed; further rows are dropped");
            self.failed = true;
            self.error = Some(err);
            return;
        }
        self.rows += 1;
    }

    fn flush(&mut self) -> Result<(), TableError> {
        CsvRecorder::flush(self)
    }
}
