use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by the storage layer.
///
/// Missing entities never show up here: lookups return `Option`, and the
/// store treats a missed update or delete as a silent no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed payload under storage key `{key}`")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize payload for storage key `{key}`")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
