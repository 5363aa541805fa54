use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) commands: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Inject the minimum Kubernetes version override into every workload of a manifest.
    ///
    /// Reads a multi-document YAML manifest and writes it back with `KUBERNETES_MIN_VERSION` set
    /// on all containers and init containers of Deployments, StatefulSets, DaemonSets and Jobs.
    /// Other resources are written back unchanged.
    Transform(TransformArgs),
}

#[derive(clap::Args, Debug)]
pub(super) struct TransformArgs {
    /// Manifest to read, stdin when omitted.
    #[arg(short = 'f', long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Where to write the transformed manifest, stdout when omitted.
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Minimum Kubernetes version to inject. Takes precedence over the `KUBERNETES_MIN_VERSION`
    /// environment variable; an empty value disables the injection.
    #[arg(long)]
    pub kubernetes_min_version: Option<String>,
}
