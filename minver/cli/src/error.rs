use std::path::PathBuf;

use miette::Diagnostic;
use minver_config::config::ConfigError;
use minver_transform::{ManifestError, ResourceError};
use thiserror::Error;

pub(crate) type CliResult<T, E = CliError> = core::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum CliError {
    #[error("Failed to resolve configuration: {0}")]
    #[diagnostic(help("Check the value of the `KUBERNETES_MIN_VERSION` environment variable."))]
    Config(#[from] ConfigError),

    #[error("Failed to open manifest file `{0}`: {1}")]
    ManifestFileOpen(PathBuf, std::io::Error),

    #[error("Failed to create output file `{0}`: {1}")]
    ManifestFileCreate(PathBuf, std::io::Error),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("{} resource(s) could not be transformed, first: {}", .0.len(), .0.first().map(ToString::to_string).unwrap_or_default())]
    #[diagnostic(help("Every failed resource is logged, rerun with `RUST_LOG=minver=debug` for details."))]
    Transform(Vec<ResourceError>),
}
