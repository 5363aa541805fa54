#![warn(clippy::indexing_slicing)]

//! Manifest transforms applied by the operator to the resources it manages.
//!
//! The main entry point is [`KubernetesMinVersionTransform`], which injects the operator-wide
//! minimum Kubernetes version into the containers of every workload in a [`Manifest`].

pub mod env;
pub mod error;
pub mod manifest;
pub mod transform;
pub mod workload;

#[cfg(test)]
mod testing;

pub use error::{ManifestError, ResourceError, TransformError};
pub use manifest::Manifest;
pub use transform::{KubernetesMinVersionTransform, Transformer};
pub use workload::WorkloadKind;
