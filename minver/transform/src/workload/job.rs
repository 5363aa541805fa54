use k8s_openapi::api::{batch::v1::Job, core::v1::PodSpec};

use super::{Workload, WorkloadKind};

/// Unlike the `apps/v1` kinds, a [`Job`] is served from `batch/v1`, so a document of kind `Job`
/// with any other `apiVersion` fails to decode.
impl Workload for Job {
    const KIND: WorkloadKind = WorkloadKind::Job;

    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec> {
        self.spec.as_mut()?.template.spec.as_mut()
    }
}
