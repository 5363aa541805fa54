use std::{
    fs::File,
    io::{BufWriter, Write},
};

use minver_config::MinVersionConfig;
use minver_transform::{KubernetesMinVersionTransform, Manifest, ManifestError};
use tracing::{info, warn};

use crate::{
    config::TransformArgs,
    error::{CliError, CliResult},
};

/// Reads the manifest, applies [`KubernetesMinVersionTransform`] and writes the result.
///
/// Nothing is written when any resource fails to transform.
pub(crate) fn transform_command(args: TransformArgs) -> CliResult<()> {
    let TransformArgs {
        file,
        output,
        kubernetes_min_version,
    } = args;

    let config = MinVersionConfig::resolve(kubernetes_min_version)?;
    let transform = KubernetesMinVersionTransform::from_config(&config);
    if !transform.is_enabled() {
        info!("no minimum Kubernetes version configured, manifest is passed through");
    }

    let mut manifest = match &file {
        Some(path) => Manifest::from_reader(
            File::open(path).map_err(|error| CliError::ManifestFileOpen(path.clone(), error))?,
        )?,
        None => Manifest::from_reader(std::io::stdin().lock())?,
    };

    let failures = manifest.transform(&transform);
    if !failures.is_empty() {
        for failure in &failures {
            warn!(%failure, "failed to transform resource");
        }

        return Err(CliError::Transform(failures));
    }

    info!(
        resources = manifest.resources().len(),
        "manifest transformed"
    );

    match output {
        Some(path) => {
            let file =
                File::create(&path).map_err(|error| CliError::ManifestFileCreate(path, error))?;
            let mut writer = BufWriter::new(file);

            manifest.to_writer(&mut writer)?;
            writer.flush().map_err(ManifestError::from)?;
        }
        None => manifest.to_writer(std::io::stdout().lock())?,
    }

    Ok(())
}
