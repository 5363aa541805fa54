use tracing::debug;

use crate::config::{from_env::FromEnv, source::ConfigSource, Result};

/// Name of the environment variable holding the minimum Kubernetes version override. It's both
/// read by the operator and injected, under the same name, into the operands' containers.
pub const KUBERNETES_MIN_VERSION_ENV: &str = "KUBERNETES_MIN_VERSION";

/// Minimum Kubernetes version override for operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinVersionConfig {
    /// `None` disables the override.
    pub kubernetes_min_version: Option<String>,
}

impl MinVersionConfig {
    /// Resolves the config once: `explicit` if given, otherwise [`KUBERNETES_MIN_VERSION_ENV`].
    ///
    /// An empty value, from either source, disables the override.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let kubernetes_min_version =
            ConfigSource::or(explicit, FromEnv::<String>::new(KUBERNETES_MIN_VERSION_ENV))
                .source_value()
                .transpose()?
                .filter(|min_version| !min_version.is_empty());

        debug!(?kubernetes_min_version, "resolved minimum version config");

        Ok(MinVersionConfig {
            kubernetes_min_version,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }
}
