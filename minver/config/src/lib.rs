#![warn(clippy::indexing_slicing)]

//! Operator configuration, resolved once per reconciliation from layered sources.

pub mod config;
pub mod min_version;
pub mod util;

pub use min_version::{MinVersionConfig, KUBERNETES_MIN_VERSION_ENV};
