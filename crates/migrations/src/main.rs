use {
    anyhow::{Context, Result},
    clap::Parser,
    contracts::ArtifactRegistry,
    migrations::{arguments::Arguments, deployer::NodeDeployer, migration},
    web3::transports::Http,
};

#[tokio::main]
async fn main() {
    let args = Arguments::parse();
    migrations::tracing::initialize("warn,migrations=debug,contracts=debug");
    tracing::info!("running migrations with validated arguments:\n{}", args);

    if let Err(err) = run(args).await {
        tracing::error!("error running migrations: {:?}", err);
        std::process::exit(1);
    }
}

async fn run(args: Arguments) -> Result<()> {
    let transport = Http::new(args.node_url.as_str()).context("create node transport")?;
    let web3 = web3::Web3::new(transport);
    let chain_id = web3.eth().chain_id().await.context("get chain id")?;
    tracing::info!(%chain_id, "connected to network");

    let deployer = NodeDeployer::new(web3, args.deployer_account, args.confirmations).await?;
    tracing::info!(account = ?deployer.account(), "sending deployments from");

    let registry = ArtifactRegistry::new(&args.artifacts_dir);
    let deployments = migration::run(&registry, &deployer).await?;
    tracing::info!("all {} contracts deployed", deployments.len());
    Ok(())
}
