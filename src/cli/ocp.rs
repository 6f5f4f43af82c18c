//! OpenShift workload commands

use crate::cli::display::TableRenderer;
use crate::domain::config::{Environment, ToolConf};
use crate::domain::workloads::{NamespaceDescriptor, ScaleDirection};
use crate::infrastructure::auth;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct ScaleUpCommand {
    /// OpenShift namespace to execute command in
    pub namespace: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ScaleDownCommand {
    /// OpenShift namespace to execute command in
    pub namespace: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RestartPodsCommand {
    /// OpenShift namespace to execute command in
    pub namespace: String,

    /// Age threshold in days; pods older than this are restarted
    pub threshold: u32,
}

impl ScaleUpCommand {
    pub async fn execute(&self, environment: Environment, conf: &ToolConf) -> anyhow::Result<()> {
        scale_namespace(&self.namespace, ScaleDirection::Up, environment, conf).await
    }
}

impl ScaleDownCommand {
    pub async fn execute(&self, environment: Environment, conf: &ToolConf) -> anyhow::Result<()> {
        scale_namespace(&self.namespace, ScaleDirection::Down, environment, conf).await
    }
}

impl RestartPodsCommand {
    pub async fn execute(&self, environment: Environment, conf: &ToolConf) -> anyhow::Result<()> {
        let descriptor = connect(&self.namespace, environment, conf).await?;

        let report = descriptor
            .restart_old_pods(self.threshold)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to restart pods: {}", e))?;

        if report.examined == 0 {
            println!("There are no pods on {} namespace.", self.namespace);
            return Ok(());
        }

        let renderer = TableRenderer::new();
        println!(
            "{}",
            renderer.render_restart_report(&self.namespace, &report)
        );

        if !report.restarted.is_empty() {
            println!(
                "Successfully restarted {} pods on {} namespace",
                report.restarted.len(),
                self.namespace
            );
        }
        Ok(())
    }
}

async fn scale_namespace(
    namespace: &str,
    direction: ScaleDirection,
    environment: Environment,
    conf: &ToolConf,
) -> anyhow::Result<()> {
    let descriptor = connect(namespace, environment, conf).await?;

    let outcomes = descriptor
        .scale_namespace(direction)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to {} namespace {}: {}", direction, namespace, e))?;

    if outcomes.is_empty() {
        println!(
            "There are no deployments on {} namespace, it is either empty or doesn't exist.",
            namespace
        );
        return Ok(());
    }

    let renderer = TableRenderer::new();
    println!(
        "{}",
        renderer.render_scale_report(namespace, direction, &outcomes)
    );

    let applied = outcomes.iter().filter(|o| o.applied).count();
    println!(
        "Successfully scaled {} of {} deployments.",
        applied,
        outcomes.len()
    );
    Ok(())
}

async fn connect(
    namespace: &str,
    environment: Environment,
    conf: &ToolConf,
) -> anyhow::Result<NamespaceDescriptor> {
    let base_url = conf.base_url(environment);
    tracing::debug!("using {} cluster at {}", environment, base_url);

    let token = auth::acquire_token().await?;
    let descriptor = NamespaceDescriptor::new(base_url, token, namespace.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to create API client: {}", e))?;
    Ok(descriptor)
}
