//! Sample workloads for tests.

use std::collections::BTreeMap;

use k8s_openapi::{
    api::{
        apps::v1::{
            DaemonSet, DaemonSetSpec, Deployment, DeploymentSpec, StatefulSet, StatefulSetSpec,
        },
        batch::v1::{Job, JobSpec},
        core::v1::{Container, PodSpec, PodTemplateSpec},
    },
    apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta},
};
use kube::core::DynamicObject;
use serde::Serialize;

use crate::{
    env::env_var,
    workload::{decode, Workload, WorkloadKind},
};

/// Pod spec with a pre-existing, stale [`KUBERNETES_MIN_VERSION_ENV`] in some containers.
///
/// [`KUBERNETES_MIN_VERSION_ENV`]: minver_config::KUBERNETES_MIN_VERSION_ENV
pub(crate) fn sample_pod_spec() -> PodSpec {
    let key = minver_config::KUBERNETES_MIN_VERSION_ENV;

    PodSpec {
        containers: vec![
            Container {
                name: "controller".to_owned(),
                image: Some("gcr.io/knative/controller:latest".to_owned()),
                env: Some(vec![env_var("EXISTING", "1"), env_var(key, "v1.20.0")]),
                ..Default::default()
            },
            Container {
                name: "webhook".to_owned(),
                image: Some("gcr.io/knative/webhook:latest".to_owned()),
                ..Default::default()
            },
        ],
        init_containers: Some(vec![
            Container {
                name: "init-a".to_owned(),
                ..Default::default()
            },
            Container {
                name: "init-b".to_owned(),
                env: Some(vec![env_var(key, "v1.19.0")]),
                ..Default::default()
            },
        ]),
        ..Default::default()
    }
}

fn labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("app".to_owned(), name.to_owned())])
}

fn metadata(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some("knative-serving".to_owned()),
        labels: Some(labels(name)),
        ..Default::default()
    }
}

fn selector(name: &str) -> LabelSelector {
    LabelSelector {
        match_labels: Some(labels(name)),
        ..Default::default()
    }
}

fn template(name: &str, pod_spec: PodSpec) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(labels(name)),
            ..Default::default()
        }),
        spec: Some(pod_spec),
    }
}

pub(crate) fn make_deployment(name: &str, pod_spec: PodSpec) -> Deployment {
    Deployment {
        metadata: metadata(name),
        spec: Some(DeploymentSpec {
            replicas: Some(2),
            selector: selector(name),
            template: template(name, pod_spec),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub(crate) fn make_stateful_set(name: &str, pod_spec: PodSpec) -> StatefulSet {
    StatefulSet {
        metadata: metadata(name),
        spec: Some(StatefulSetSpec {
            replicas: Some(1),
            selector: selector(name),
            template: template(name, pod_spec),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub(crate) fn make_daemon_set(name: &str, pod_spec: PodSpec) -> DaemonSet {
    DaemonSet {
        metadata: metadata(name),
        spec: Some(DaemonSetSpec {
            selector: selector(name),
            template: template(name, pod_spec),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub(crate) fn make_job(name: &str, mut pod_spec: PodSpec) -> Job {
    pod_spec.restart_policy = Some("Never".to_owned());

    Job {
        metadata: metadata(name),
        spec: Some(JobSpec {
            backoff_limit: Some(3),
            template: template(name, pod_spec),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub(crate) fn make_dynamic<K: Serialize>(resource: &K) -> DynamicObject {
    serde_json::to_value(resource)
        .and_then(serde_json::from_value)
        .expect("resource should convert to a dynamic object")
}

pub(crate) fn make_workload(kind: WorkloadKind, name: &str, pod_spec: PodSpec) -> DynamicObject {
    match kind {
        WorkloadKind::Deployment => make_dynamic(&make_deployment(name, pod_spec)),
        WorkloadKind::StatefulSet => make_dynamic(&make_stateful_set(name, pod_spec)),
        WorkloadKind::DaemonSet => make_dynamic(&make_daemon_set(name, pod_spec)),
        WorkloadKind::Job => make_dynamic(&make_job(name, pod_spec)),
    }
}

fn pod_spec<W: Workload>(doc: &DynamicObject) -> PodSpec {
    let mut workload: W = decode(doc).expect("document should decode");

    workload.pod_spec_mut().cloned().unwrap_or_default()
}

pub(crate) fn pod_spec_of(doc: &DynamicObject) -> PodSpec {
    match WorkloadKind::of(doc).expect("document should be a workload") {
        WorkloadKind::Deployment => pod_spec::<Deployment>(doc),
        WorkloadKind::StatefulSet => pod_spec::<StatefulSet>(doc),
        WorkloadKind::DaemonSet => pod_spec::<DaemonSet>(doc),
        WorkloadKind::Job => pod_spec::<Job>(doc),
    }
}

pub(crate) fn env_pairs(container: &Container) -> Vec<(&str, &str)> {
    container
        .env
        .iter()
        .flatten()
        .map(|env| (env.name.as_str(), env.value.as_deref().unwrap_or_default()))
        .collect()
}
