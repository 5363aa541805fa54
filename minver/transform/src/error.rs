use thiserror::Error;

use crate::workload::WorkloadKind;

pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Failure of a single [`Transformer`](crate::Transformer) call. The document it was called with
/// is left as provided.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to decode `{name}` as {kind}: {source}")]
    Decode {
        kind: WorkloadKind,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode the env of {kind} `{name}`: {source}")]
    Encode {
        kind: WorkloadKind,
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write manifest: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`TransformError`] together with the resource of a [`Manifest`](crate::Manifest) it
/// happened on.
#[derive(Debug, Error)]
#[error("resource #{index} ({kind} `{name}`): {source}")]
pub struct ResourceError {
    pub index: usize,
    pub kind: String,
    pub name: String,
    #[source]
    pub source: TransformError,
}
