use k8s_openapi::api::{apps::v1::DaemonSet, core::v1::PodSpec};

use super::{Workload, WorkloadKind};

impl Workload for DaemonSet {
    const KIND: WorkloadKind = WorkloadKind::DaemonSet;

    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec> {
        self.spec.as_mut()?.template.spec.as_mut()
    }
}
