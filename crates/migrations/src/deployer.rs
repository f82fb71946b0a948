use {
    anyhow::{Context, Result},
    contracts::ContractArtifact,
    web3::{contract::Contract, types::Address, Transport, Web3},
};

/// A contract instance brought live on the network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployment {
    /// Name of the deployed contract.
    pub contract: String,
    /// Address the network assigned to the new instance.
    pub address: Address,
}

/// Capability to instantiate a compiled contract on a network.
///
/// The migration only ever talks to this trait; how the creation transaction
/// reaches the chain is the implementation's business.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Requests the on chain instantiation of an artifact and returns the
    /// resulting deployment once the network accepted it.
    async fn deploy(&self, artifact: &ContractArtifact) -> Result<Deployment>;
}

/// Deploys contracts through an Ethereum node. The creation transaction is
/// signed by the node with one of its managed accounts.
pub struct NodeDeployer<T: Transport> {
    web3: Web3<T>,
    from: Address,
    confirmations: usize,
}

impl<T> NodeDeployer<T>
where
    T: Transport,
{
    /// Creates a deployer sending from the given account, or from the node's
    /// first managed account if none is configured.
    pub async fn new(web3: Web3<T>, from: Option<Address>, confirmations: usize) -> Result<Self> {
        let from = match from {
            Some(address) => address,
            None => *web3
                .eth()
                .accounts()
                .await
                .context("get node accounts")?
                .first()
                .context("node manages no account to deploy from")?,
        };
        Ok(Self {
            web3,
            from,
            confirmations,
        })
    }

    /// The account deployment transactions are sent from.
    pub fn account(&self) -> Address {
        self.from
    }
}

#[async_trait::async_trait]
impl<T> ContractDeployer for NodeDeployer<T>
where
    T: Transport + Send + Sync + 'static,
    T::Out: Send,
{
    async fn deploy(&self, artifact: &ContractArtifact) -> Result<Deployment> {
        let interface =
            serde_json::to_vec(&artifact.abi).context("serialize contract interface")?;
        // The deployment builder wants the creation code without the 0x
        // prefix the build output carries.
        let bytecode = artifact.bytecode.trim_start_matches("0x");
        let instance = Contract::deploy(self.web3.eth(), &interface)
            .with_context(|| format!("invalid interface of {}", artifact.contract_name))?
            .confirmations(self.confirmations)
            .execute(bytecode, (), self.from)
            .await
            .with_context(|| format!("instantiate {}", artifact.contract_name))?;
        Ok(Deployment {
            contract: artifact.contract_name.clone(),
            address: instance.address(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{self, Ready};
    use jsonrpc_core::{Call, Id, MethodCall, Params};
    use serde_json::{json, Value};
    use web3::{error::Result as Web3Result, RequestId};

    /// Transport stub answering `eth_accounts` with a fixed account list and
    /// nothing else.
    #[derive(Clone, Debug)]
    struct AccountsTransport {
        accounts: Vec<Address>,
    }

    impl Transport for AccountsTransport {
        type Out = Ready<Web3Result<Value>>;

        fn prepare(&self, method: &str, params: Vec<Value>) -> (RequestId, Call) {
            assert_eq!(method, "eth_accounts");
            assert!(params.is_empty());
            (
                0,
                MethodCall {
                    jsonrpc: None,
                    method: method.to_string(),
                    params: Params::Array(params),
                    id: Id::Num(0),
                }
                .into(),
            )
        }

        fn send(&self, _id: RequestId, _request: Call) -> Self::Out {
            future::ready(Ok(json!(self.accounts)))
        }
    }

    #[tokio::test]
    async fn defaults_to_first_node_account() {
        let web3 = Web3::new(AccountsTransport {
            accounts: vec![Address::from_low_u64_be(42), Address::from_low_u64_be(7)],
        });
        let deployer = NodeDeployer::new(web3, None, 0).await.unwrap();
        assert_eq!(deployer.account(), Address::from_low_u64_be(42));
    }

    #[tokio::test]
    async fn configured_account_skips_node_query() {
        // An empty account list would make falling back to the node fail, so
        // this also asserts the node is not consulted at all.
        let web3 = Web3::new(AccountsTransport { accounts: vec![] });
        let account = Address::from_low_u64_be(1);
        let deployer = NodeDeployer::new(web3, Some(account), 0).await.unwrap();
        assert_eq!(deployer.account(), account);
    }

    #[tokio::test]
    async fn node_without_accounts_is_an_error() {
        let web3 = Web3::new(AccountsTransport { accounts: vec![] });
        assert!(NodeDeployer::new(web3, None, 0).await.is_err());
    }
}
