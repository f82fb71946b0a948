use {clap::Parser, std::path::PathBuf, url::Url, web3::types::Address};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Directory containing the compiled contract artifacts.
    #[clap(long, env, default_value = "build/contracts")]
    pub artifacts_dir: PathBuf,

    /// Account to send deployment transactions from. Defaults to the first
    /// account the node manages.
    #[clap(long, env)]
    pub deployer_account: Option<Address>,

    /// Number of block confirmations to wait for after each deployment
    /// before issuing the next one.
    #[clap(long, env, default_value = "0")]
    pub confirmations: usize,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "artifacts_dir: {}", self.artifacts_dir.display())?;
        writeln!(f, "deployer_account: {:?}", self.deployer_account)?;
        writeln!(f, "confirmations: {}", self.confirmations)?;
        Ok(())
    }
}
