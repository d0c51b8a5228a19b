//! # ethnote
//!
//! A wallet-interaction core for Ethereum-family networks: connect to a
//! browser wallet, send value transfers carrying an optional human-readable
//! note in the payload, and resolve transaction hashes into a local,
//! insertion-ordered record list.
//!
//! The workspace splits along its seams:
//!
//! - [`session`](ethnote_session): the connection lifecycle state machine
//!   and the wallet-extension port;
//! - [`records`](ethnote_records): hash resolution against read endpoints
//!   and the transaction list;
//! - [`codec`](ethnote_codec): note text to payload hex and back, with the
//!   undecodable sentinel for binary payloads;
//! - [`provider`](ethnote_provider): chain profiles and endpoint
//!   selection;
//! - [`error`](ethnote_error): the shared failure taxonomy.
//!
//! ## Quickstart
//!
//! ```no_run
//! use ethnote::prelude::*;
//!
//! # async fn run(connector: impl WalletConnector) -> Result<(), Error> {
//! let (event_sender, mut event_queue) = event_channel();
//! let mut session = WalletSession::new(
//!     connector,
//!     FileFlag::new("wallet-connected.json"),
//!     EndpointRegistry::with_defaults(),
//! );
//! session.startup().await;
//!
//! let resolver = Resolver::new(EndpointRegistry::with_defaults());
//! let mut store = TransactionStore::new();
//!
//! if let (Some(chain), true) = (session.chain_id(), session.is_connected()) {
//!     let hash = session
//!         .send_transfer("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".parse().unwrap(),
//!                        U256::from(10_000_000_000_000_000u64), "gm")
//!         .await?;
//!     if let Some(record) = resolver.resolve(chain, hash).await? {
//!         store.append(record);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use ethnote_codec as codec;
pub use ethnote_error as error;
pub use ethnote_provider as provider;
pub use ethnote_records as records;
pub use ethnote_session as session;

/// Re-export of the alloy primitive types used across the API surface.
pub use alloy::primitives::{Address, Bytes, B256, U256};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Address, Bytes, B256, U256};

    pub use ethnote_codec::{decode_note, encode_note, DecodedNote};
    pub use ethnote_error::{Error, ErrorKind, Result};
    pub use ethnote_provider::{
        AddChainParams, ChainProfile, EndpointConfig, EndpointRegistry, RpcVendor, MAINNET,
        SEPOLIA,
    };
    pub use ethnote_records::{
        ChainReader, Resolver, TransactionRecord, TransactionStore, TxStatus,
    };
    pub use ethnote_session::{
        event_channel, ConnectionState, FileFlag, MemoryFlag, ReconnectFlag, TransferRequest,
        WalletConnector, WalletEvent, WalletSession,
    };
}
