//! Typed access to the pod template of the workload kinds we inject into.
//!
//! Each supported kind is a [`WorkloadKind`] tag plus a [`Workload`] impl on the matching
//! `k8s_openapi` type, which is where its pod template lives. New kinds are added by extending
//! both.

use std::fmt;

use k8s_openapi::api::{
    apps::v1::{DaemonSet, Deployment, StatefulSet},
    batch::v1::Job,
    core::v1::{Container, EnvVar, PodSpec},
};
use kube::{core::DynamicObject, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::{
    env::merge_container_env,
    error::{Result, TransformError},
};

mod daemon_set;
mod deployment;
mod job;
mod stateful_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
    Job,
}

impl WorkloadKind {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "Deployment" => Some(WorkloadKind::Deployment),
            "StatefulSet" => Some(WorkloadKind::StatefulSet),
            "DaemonSet" => Some(WorkloadKind::DaemonSet),
            "Job" => Some(WorkloadKind::Job),
            _ => None,
        }
    }

    /// Kind of `doc`, `None` when it is not a workload (or has no type information at all).
    pub fn of(doc: &DynamicObject) -> Option<Self> {
        doc.types
            .as_ref()
            .and_then(|types| Self::from_kind(&types.kind))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::DaemonSet => "DaemonSet",
            WorkloadKind::Job => "Job",
        }
    }

    /// Decodes `doc` as this kind, merges `overrides` into every container of its pod template,
    /// and returns a copy of `doc` with only the changed env lists written back. `doc` itself is
    /// not touched.
    pub fn inject_env(self, doc: &DynamicObject, overrides: &[EnvVar]) -> Result<DynamicObject> {
        match self {
            WorkloadKind::Deployment => inject_env::<Deployment>(doc, overrides),
            WorkloadKind::StatefulSet => inject_env::<StatefulSet>(doc, overrides),
            WorkloadKind::DaemonSet => inject_env::<DaemonSet>(doc, overrides),
            WorkloadKind::Job => inject_env::<Job>(doc, overrides),
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed workload shape with a single pod template.
pub trait Workload: Resource<DynamicType = ()> + Serialize + DeserializeOwned {
    const KIND: WorkloadKind;

    /// JSON pointer to the pod template's `spec` inside the document.
    const POD_SPEC_POINTER: &'static str = "/spec/template/spec";

    /// The pod template's `spec`, `None` when the workload doesn't carry one.
    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec>;
}

pub fn decode<W: Workload>(doc: &DynamicObject) -> Result<W> {
    serde_json::to_value(doc)
        .and_then(serde_json::from_value)
        .map_err(|source| TransformError::Decode {
            kind: W::KIND,
            name: doc.name_any(),
            source,
        })
}

#[tracing::instrument(level = "trace", skip_all, fields(kind = %W::KIND, name = %doc.name_any()), err)]
pub fn inject_env<W: Workload>(doc: &DynamicObject, overrides: &[EnvVar]) -> Result<DynamicObject> {
    let mut workload: W = decode(doc)?;

    let Some(pod_spec) = workload.pod_spec_mut() else {
        trace!("no pod template spec, nothing to inject");
        return Ok(doc.clone());
    };
    inject_pod_spec_env(pod_spec, overrides);

    let mut injected = doc.clone();
    if let Some(target) = injected.data.pointer_mut(W::POD_SPEC_POINTER) {
        write_pod_spec_env(target, pod_spec).map_err(|source| TransformError::Encode {
            kind: W::KIND,
            name: doc.name_any(),
            source,
        })?;
    }

    Ok(injected)
}

/// Writes the env lists of `pod_spec` into `target`, the JSON the pod spec was decoded from.
///
/// Everything else in `target` is left as it is, including fields the typed shape doesn't know.
fn write_pod_spec_env(target: &mut Value, pod_spec: &PodSpec) -> serde_json::Result<()> {
    write_containers_env(target.get_mut("containers"), &pod_spec.containers)?;

    match &pod_spec.init_containers {
        Some(init_containers) => {
            write_containers_env(target.get_mut("initContainers"), init_containers)
        }
        None => Ok(()),
    }
}

fn write_containers_env(
    target: Option<&mut Value>,
    containers: &[Container],
) -> serde_json::Result<()> {
    let Some(Value::Array(target)) = target else {
        return Ok(());
    };

    for (container, target) in containers.iter().zip(target) {
        let (Some(env), Some(target)) = (&container.env, target.as_object_mut()) else {
            continue;
        };

        let target = target
            .entry("env")
            .or_insert_with(|| Value::Array(Vec::new()));
        if !target.is_array() {
            // `env: null`
            *target = Value::Array(Vec::new());
        }

        if let Value::Array(target) = target {
            write_env(target, env)?;
        }
    }

    Ok(())
}

/// Overwrites the entries of `target` that differ from `env`, and appends the ones it lacks.
///
/// Merging only replaces entries in place or appends, so `env` is never shorter than `target`.
/// An entry equal to its typed counterpart keeps its original JSON.
fn write_env(target: &mut Vec<Value>, env: &[EnvVar]) -> serde_json::Result<()> {
    for (index, entry) in env.iter().enumerate() {
        match target.get_mut(index) {
            Some(existing)
                if serde_json::from_value::<EnvVar>(existing.clone())
                    .is_ok_and(|existing| existing == *entry) => {}
            Some(existing) => *existing = serde_json::to_value(entry)?,
            None => target.push(serde_json::to_value(entry)?),
        }
    }

    Ok(())
}

/// Merges `overrides` into each container, then each init container, of `pod_spec`.
pub fn inject_pod_spec_env(pod_spec: &mut PodSpec, overrides: &[EnvVar]) {
    let containers = pod_spec
        .containers
        .iter_mut()
        .chain(pod_spec.init_containers.iter_mut().flatten());

    for container in containers {
        merge_container_env(overrides, &mut container.env);
    }
}
