use k8s_openapi::api::core::v1::EnvVar;

/// Merges `overrides` into `target`, keyed by [`EnvVar::name`].
///
/// An override replaces the first entry in `target` with the same name, in place. Overrides with
/// no matching entry are appended, in override order. Entries are never removed or reordered.
pub fn merge_env(overrides: &[EnvVar], target: &mut Vec<EnvVar>) {
    for env in overrides {
        match target.iter_mut().find(|existing| existing.name == env.name) {
            Some(existing) => *existing = env.clone(),
            None => target.push(env.clone()),
        }
    }
}

/// [`merge_env`] for a container's optional `env` list. A missing list becomes `overrides`.
pub fn merge_container_env(overrides: &[EnvVar], target: &mut Option<Vec<EnvVar>>) {
    merge_env(overrides, target.get_or_insert_with(Vec::new));
}

/// Builds a plain `name=value` [`EnvVar`].
pub fn env_var(name: impl Into<String>, value: impl Into<String>) -> EnvVar {
    EnvVar {
        name: name.into(),
        value: Some(value.into()),
        ..Default::default()
    }
}
