use std::io;
use std::path::PathBuf;

/// Failures of the example-table layer.
///
/// Malformed rows are never errors (they decode to defaulted examples); only the underlying
/// reader or writer can fail.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to open example table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("example table i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("example recorder stopped after {rows} rows")]
    Disabled { rows: u64 },
}
