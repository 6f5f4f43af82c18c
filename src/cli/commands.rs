// CLI command definitions

use super::ocp::{RestartPodsCommand, ScaleDownCommand, ScaleUpCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "oc-utils",
    version,
    about = "Extra functionality for OpenShift management",
    long_about = "A command-line utility to provide extra functionality for OpenShift management"
)]
pub struct CliArgs {
    /// Use production OpenShift (default is non-prod)
    #[arg(long, global = true)]
    pub prod: bool,

    /// Path to a TOML configuration file with cluster URLs
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Scale up all the pods in a given namespace
    #[command(name = "scaleup")]
    ScaleUp(ScaleUpCommand),

    /// Scale down all the pods in a given namespace
    #[command(name = "scaledown")]
    ScaleDown(ScaleDownCommand),

    /// Restart all the pods in a namespace that are older than a given threshold
    #[command(name = "restartpods")]
    RestartPods(RestartPodsCommand),
}
