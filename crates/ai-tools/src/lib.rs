//! Experience recording and example-table I/O.
//!
//! Simulations push `(WorldState, Action)` pairs into an [`ExampleSink`]; offline learning pulls
//! them back out of an [`ExampleSource`]. The on-disk format is the comma separated layout of
//! [`ExampleTable`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod recorder;
pub mod source;
pub mod table;

pub use error::TableError;
pub use recorder::{CsvRecorder, ExampleSink, NullSink, VecSink};
pub use source::{CsvSource, ExampleSource};
pub use table::{ExampleTable, ACTION_COLUMN};
