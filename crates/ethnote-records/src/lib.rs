//! # ethnote Records
//!
//! Resolves transaction hashes into normalized records and keeps the
//! locally-accumulated transaction list.
//!
//! ## Resolving a hash
//!
//! The [`Resolver`] looks a hash up on the network a chain id names,
//! assembles the transaction, its receipt (absent while pending) and the
//! containing block (for the timestamp) into a [`TransactionRecord`], and
//! decodes the payload into a note where it reads as UTF-8.
//!
//! ```no_run
//! # use ethnote_records::Resolver;
//! # use ethnote_provider::{EndpointRegistry, SEPOLIA};
//! # use alloy::primitives::B256;
//! # async fn lookup() -> Result<(), ethnote_error::Error> {
//! let resolver = Resolver::new(EndpointRegistry::with_defaults());
//! let hash: B256 =
//!     "0xe4216d69bf935587b82243e68189de7ade0aa5b6f70dd0de8636b8d643431c0b".parse().unwrap();
//! match resolver.resolve(SEPOLIA, hash).await? {
//!     Some(record) => println!("status: {:?}", record.status),
//!     None => println!("no such transaction"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! An unknown hash is `Ok(None)`, not an error: a mistyped or
//! not-yet-propagated hash is a valid outcome the caller displays as such.
//!
//! ## The list
//!
//! [`TransactionStore`] holds resolved records newest-first; re-resolving a
//! hash replaces the stored record in place, which is how a pending entry
//! advances to success or failure without moving in the list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod format;
mod reader;
mod record;
mod resolver;
mod store;

pub use format::{format_eth, shorten_address, shorten_hash};
pub use reader::{BlockData, ChainReader, ReceiptData, RpcReader, TxData};
pub use record::{TransactionRecord, TxStatus, RECEIPT_SUCCESS};
pub use resolver::{resolve_with, Resolver};
pub use store::TransactionStore;
