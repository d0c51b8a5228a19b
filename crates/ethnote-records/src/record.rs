use alloy::primitives::{Address, Bytes, B256, U256};
use ethnote_codec::DecodedNote;

use crate::reader::{BlockData, ReceiptData, TxData};

/// Receipt status code signalling successful execution.
pub const RECEIPT_SUCCESS: u64 = 1;

/// Execution status of a resolved transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// No receipt yet
    Pending,
    /// Receipt with the success status code
    Success,
    /// Receipt with any other status code
    Failed,
}

/// A normalized view of one transaction, assembled from the transaction
/// itself, its receipt, and the containing block.
///
/// Records are immutable: re-resolving the same hash produces a fresh
/// record which replaces the old one in the [store](crate::TransactionStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction hash, the record's identity
    pub hash: B256,
    /// Sender address
    pub from: Address,
    /// Recipient address; `None` signals contract creation
    pub to: Option<Address>,
    /// Transferred amount in wei
    pub value: U256,
    /// Raw payload bytes attached to the transfer
    pub payload: Bytes,
    /// Decoded payload text; `None` iff the payload is empty
    pub note: Option<DecodedNote>,
    /// Containing block number; `None` while pending
    pub block_number: Option<u64>,
    /// Block timestamp, seconds since epoch; `None` while pending
    pub timestamp: Option<u64>,
    /// Derived execution status
    pub status: TxStatus,
}

impl TransactionRecord {
    /// Assembles a record from its fetched parts.
    ///
    /// Status follows the receipt: absent means pending, the success code
    /// means success, anything else means failed. An empty payload carries
    /// no note; a non-empty one decodes to text or to the undecodable
    /// sentinel, never to an error.
    pub fn assemble(
        tx: TxData,
        receipt: Option<ReceiptData>,
        block: Option<BlockData>,
    ) -> Self {
        let status = match receipt {
            None => TxStatus::Pending,
            Some(r) if r.status_code == RECEIPT_SUCCESS => TxStatus::Success,
            Some(_) => TxStatus::Failed,
        };
        let note = if tx.payload.is_empty() {
            None
        } else {
            Some(ethnote_codec::decode_bytes(&tx.payload))
        };

        Self {
            hash: tx.hash,
            from: tx.from,
            to: tx.to,
            value: tx.value,
            payload: tx.payload,
            note,
            block_number: tx.block_number,
            timestamp: block.map(|b| b.timestamp),
            status,
        }
    }

    /// Returns true while the transaction has no receipt.
    pub fn is_pending(&self) -> bool {
        self.status == TxStatus::Pending
    }
}
