use {
    crate::deployer::{ContractDeployer, Deployment},
    anyhow::{Context, Result},
    contracts::ArtifactRegistry,
};

/// Contracts this migration brings live, in deployment order.
pub const CONTRACTS: [&str; 2] = ["UserRequestContract", "ResourceResponseContract"];

/// Deploys all contracts of the migration in a fixed sequence.
///
/// The sequence stops at the first failure and there is no rollback:
/// contracts deployed before the failure stay live on the network. Every
/// invocation creates fresh instances; re-running a migration never reuses
/// addresses.
pub async fn run(
    registry: &ArtifactRegistry,
    deployer: &dyn ContractDeployer,
) -> Result<Vec<Deployment>> {
    let mut deployments = Vec::with_capacity(CONTRACTS.len());
    for name in CONTRACTS {
        let artifact = registry.artifact(name)?;
        tracing::info!(contract = name, "deploying");
        let deployment = deployer
            .deploy(&artifact)
            .await
            .with_context(|| format!("deploy {name}"))?;
        tracing::info!(contract = name, address = ?deployment.address, "deployed");
        deployments.push(deployment);
    }
    Ok(deployments)
}
