use alloy::consensus::Transaction as _;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{BlockId, BlockNumberOrTag};
use async_trait::async_trait;

use ethnote_error::{Error, Result};

/// The transaction fields a record is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxData {
    /// Transaction hash
    pub hash: B256,
    /// Sender address
    pub from: Address,
    /// Recipient address; `None` signals contract creation
    pub to: Option<Address>,
    /// Transferred amount in wei
    pub value: U256,
    /// Raw payload bytes (may be empty)
    pub payload: Bytes,
    /// Containing block number; `None` while pending
    pub block_number: Option<u64>,
}

/// The receipt fields a record is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptData {
    /// Execution status code (1 = success)
    pub status_code: u64,
}

/// The block fields a record is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData {
    /// Block number
    pub number: u64,
    /// Block timestamp, seconds since epoch
    pub timestamp: u64,
}

/// Read access to a chain, scoped to what record resolution needs.
///
/// The production implementation is [`RpcReader`]; tests substitute an
/// in-memory one.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Looks up a transaction by hash. `None` means the endpoint does not
    /// know the hash.
    async fn transaction_by_hash(&self, hash: B256) -> Result<Option<TxData>>;

    /// Looks up the receipt for a hash. `None` means not yet mined.
    async fn transaction_receipt(&self, hash: B256) -> Result<Option<ReceiptData>>;

    /// Looks up a block by number.
    async fn block_by_number(&self, number: u64) -> Result<Option<BlockData>>;
}

/// A [`ChainReader`] over a JSON-RPC endpoint using Alloy.
pub struct RpcReader {
    url: String,
    chain_id: u64,
}

impl RpcReader {
    /// Creates a reader for the given endpoint URL.
    pub fn new(url: impl Into<String>, chain_id: u64) -> Self {
        Self {
            url: url.into(),
            chain_id,
        }
    }

    fn provider(&self) -> Result<impl Provider> {
        let url = self.url.parse().map_err(|e| {
            Error::Config(format!("invalid endpoint URL '{}': {e}", self.url))
        })?;
        Ok(ProviderBuilder::new().connect_http(url))
    }

    fn endpoint_error(&self, reason: impl ToString) -> Error {
        Error::EndpointUnavailable {
            chain_id: self.chain_id,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl ChainReader for RpcReader {
    async fn transaction_by_hash(&self, hash: B256) -> Result<Option<TxData>> {
        let provider = self.provider()?;
        let tx = provider
            .get_transaction_by_hash(hash)
            .await
            .map_err(|e| self.endpoint_error(e))?;

        Ok(tx.map(|tx| TxData {
            hash,
            from: tx.inner.signer(),
            to: tx.to(),
            value: tx.value(),
            payload: tx.input().clone(),
            block_number: tx.block_number,
        }))
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<Option<ReceiptData>> {
        let provider = self.provider()?;
        let receipt = provider
            .get_transaction_receipt(hash)
            .await
            .map_err(|e| self.endpoint_error(e))?;

        Ok(receipt.map(|receipt| ReceiptData {
            status_code: receipt.status() as u64,
        }))
    }

    async fn block_by_number(&self, number: u64) -> Result<Option<BlockData>> {
        let provider = self.provider()?;
        let block = provider
            .get_block(BlockId::Number(BlockNumberOrTag::Number(number)))
            .await
            .map_err(|e| self.endpoint_error(e))?;

        Ok(block.map(|block| BlockData {
            number: block.header.number,
            timestamp: block.header.timestamp,
        }))
    }
}
