use k8s_openapi::api::core::v1::EnvVar;
use kube::{core::DynamicObject, ResourceExt};
use minver_config::{MinVersionConfig, KUBERNETES_MIN_VERSION_ENV};
use tracing::{debug, trace};

use crate::{env::env_var, error::Result, workload::WorkloadKind};

/// A mutation applied to one resource document at a time.
///
/// On failure the document must be left as it was passed in.
pub trait Transformer {
    fn transform(&self, doc: &mut DynamicObject) -> Result<()>;
}

impl<F> Transformer for F
where
    F: Fn(&mut DynamicObject) -> Result<()>,
{
    fn transform(&self, doc: &mut DynamicObject) -> Result<()> {
        self(doc)
    }
}

/// Injects [`KUBERNETES_MIN_VERSION_ENV`] into every container and init container of the
/// workloads it's applied to, so that operands honor the operator-wide minimum Kubernetes version.
///
/// Whether the transform does anything is decided once, when it's built: a transform built from an
/// empty value stays [`KubernetesMinVersionTransform::Disabled`] for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum KubernetesMinVersionTransform {
    Disabled,
    Enabled(Vec<EnvVar>),
}

impl KubernetesMinVersionTransform {
    pub fn new(min_version: impl Into<String>) -> Self {
        let min_version = min_version.into();

        if min_version.is_empty() {
            KubernetesMinVersionTransform::Disabled
        } else {
            KubernetesMinVersionTransform::Enabled(vec![env_var(
                KUBERNETES_MIN_VERSION_ENV,
                min_version,
            )])
        }
    }

    pub fn from_config(config: &MinVersionConfig) -> Self {
        config
            .kubernetes_min_version
            .as_deref()
            .map(Self::new)
            .unwrap_or(KubernetesMinVersionTransform::Disabled)
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, KubernetesMinVersionTransform::Enabled(_))
    }
}

impl Transformer for KubernetesMinVersionTransform {
    #[tracing::instrument(level = "debug", skip_all, fields(name = %doc.name_any()), err)]
    fn transform(&self, doc: &mut DynamicObject) -> Result<()> {
        let KubernetesMinVersionTransform::Enabled(overrides) = self else {
            return Ok(());
        };

        let Some(kind) = WorkloadKind::of(doc) else {
            trace!("not a workload, skipping");
            return Ok(());
        };

        let mut injected = kind.inject_env(doc, overrides)?;
        // Output never carries a creation timestamp, so applying again yields the same document.
        injected.metadata.creation_timestamp = None;

        debug!(%kind, "injected {KUBERNETES_MIN_VERSION_ENV}");
        *doc = injected;

        Ok(())
    }
}
