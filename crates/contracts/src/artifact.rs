use serde::Deserialize;

/// A compiled contract as produced by the Truffle build pipeline.
///
/// Only the properties required for deployment are kept. Everything else in
/// the build output (source maps, AST, documentation, ...) is ignored when
/// parsing.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name the contract was compiled under.
    pub contract_name: String,
    /// The contract interface in JSON ABI format. Kept as raw JSON because it
    /// is handed to the node library verbatim.
    pub abi: serde_json::Value,
    /// Hex encoded creation bytecode, `0x` prefixed.
    pub bytecode: String,
}
