//! Node connection.
//!
//! Opens one WebSocket RPC client, asks the node who it is, and builds the
//! metadata-aware client used to construct calls.

use std::fmt;

use subxt::backend::legacy::LegacyRpcMethods;
use subxt::backend::rpc::RpcClient;
use subxt::{OnlineClient, PolkadotConfig};
use tracing::info;

use crate::chain::Chain;
use crate::error::Error;

/// Identity reported by the node's `system_*` RPCs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub chain: String,
    pub name: String,
    pub version: String,
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain {} using {} v{}", self.chain, self.name, self.version)
    }
}

/// Connect to `endpoint` and return a chain handle.
///
/// Accepts both `wss://` and plain `ws://` URLs. Any failure on the way is an
/// [`Error::Connection`]; nothing is retried.
pub async fn connect(endpoint: &str) -> Result<Chain, Error> {
    info!("Connecting to {}...", endpoint);

    let connection_error = |source: subxt::Error| Error::Connection {
        endpoint: endpoint.to_string(),
        source,
    };

    let rpc_client = RpcClient::from_insecure_url(endpoint)
        .await
        .map_err(connection_error)?;

    let identity = node_identity(&LegacyRpcMethods::new(rpc_client.clone()))
        .await
        .map_err(connection_error)?;

    let api = OnlineClient::<PolkadotConfig>::from_rpc_client(rpc_client)
        .await
        .map_err(connection_error)?;

    info!("Connected to {}", identity);
    Ok(Chain::new(api))
}

/// Issue the three identity requests together and wait for all of them.
async fn node_identity(
    rpc: &LegacyRpcMethods<PolkadotConfig>,
) -> Result<NodeIdentity, subxt::Error> {
    let (chain, name, version) =
        tokio::try_join!(rpc.system_chain(), rpc.system_name(), rpc.system_version())?;

    Ok(NodeIdentity {
        chain,
        name,
        version,
    })
}
