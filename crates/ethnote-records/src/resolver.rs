use alloy::primitives::B256;
use ethnote_error::Result;
use ethnote_provider::EndpointRegistry;

use crate::reader::{ChainReader, RpcReader};
use crate::record::TransactionRecord;

/// Resolves transaction hashes against per-chain read endpoints.
pub struct Resolver {
    registry: EndpointRegistry,
}

impl Resolver {
    /// Creates a resolver over an endpoint registry.
    pub fn new(registry: EndpointRegistry) -> Self {
        Self { registry }
    }

    /// Returns the endpoint registry.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Resolves a hash on the network a chain id names.
    ///
    /// `Ok(None)` means the endpoint does not know the hash. An unknown
    /// chain id fails with `UnsupportedNetwork`; transport failures with
    /// `EndpointUnavailable`. No retry happens at this layer.
    pub async fn resolve(
        &self,
        chain_id: u64,
        hash: B256,
    ) -> Result<Option<TransactionRecord>> {
        let url = self.registry.url_for(chain_id)?;
        let reader = RpcReader::new(url, chain_id);
        resolve_with(&reader, hash).await
    }
}

/// Resolves a hash through any [`ChainReader`].
///
/// Fetches the transaction, then the receipt, then the containing block
/// when a block number is known. The fetches have no ordering requirement;
/// they run sequentially here because the record needs all of them anyway.
pub async fn resolve_with<R>(reader: &R, hash: B256) -> Result<Option<TransactionRecord>>
where
    R: ChainReader + ?Sized,
{
    let Some(tx) = reader.transaction_by_hash(hash).await? else {
        tracing::debug!(%hash, "transaction not found");
        return Ok(None);
    };

    let receipt = reader.transaction_receipt(hash).await?;
    let block = match tx.block_number {
        Some(number) => reader.block_by_number(number).await?,
        None => None,
    };

    Ok(Some(TransactionRecord::assemble(tx, receipt, block)))
}
