//! # ethnote Error
//!
//! This crate provides the unified error types for the ethnote
//! wallet-interaction core. Every failure path in the workspace is
//! classified here; callers branch on [`ErrorKind`] instead of matching
//! provider-specific error objects.
//!
//! Two outcomes deliberately do NOT appear in this taxonomy:
//!
//! - a transaction hash that resolves to nothing is `Ok(None)` at the
//!   resolver, not an error: absence is a valid answer for a mistyped or
//!   not-yet-propagated hash;
//! - a payload that fails UTF-8 decoding becomes the undecodable sentinel
//!   in `ethnote-codec`, never an error.
//!
//! ## Example
//!
//! ```
//! use ethnote_error::{Error, ErrorKind};
//!
//! let err = Error::UserRejected("connect request declined".to_string());
//! assert_eq!(err.kind(), ErrorKind::UserRejected);
//! assert!(err.is_user_rejection());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

/// The main error type for ethnote operations.
#[derive(Error, Debug)]
pub enum Error {
    // ============ Wallet Extension Errors ============
    /// No browser wallet extension is available
    #[error("No wallet extension available")]
    WalletUnavailable,

    /// A wallet prompt was declined by the user
    #[error("Rejected by user: {0}")]
    UserRejected(String),

    /// An operation required an active connection
    #[error("Wallet session is not connected")]
    NotConnected,

    /// The wallet balance does not cover the requested transfer
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    // ============ Network Errors ============
    /// A read endpoint could not be reached or answered with a failure
    #[error("Endpoint unavailable for chain {chain_id}: {reason}")]
    EndpointUnavailable {
        /// Chain the request targeted
        chain_id: u64,
        /// Transport or RPC failure detail
        reason: String,
    },

    /// An RPC request failed at the provider level
    #[error("RPC request failed: {method} - {reason}")]
    Rpc {
        /// RPC method name
        method: String,
        /// Error reason
        reason: String,
    },

    /// The chain id is not known to the wallet or to the endpoint registry
    #[error("Unsupported network: chain id {chain_id}")]
    UnsupportedNetwork {
        /// The unrecognized chain id
        chain_id: u64,
    },

    // ============ Input Errors ============
    /// Invalid address format
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress {
        /// The invalid address
        address: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid transfer amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid endpoint or registry configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // ============ Generic ============
    /// Unknown/other error
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], for callers that decide how to
/// surface a failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The user declined a wallet prompt
    UserRejected,
    /// A read or wallet endpoint failed
    EndpointUnavailable,
    /// Balance too low for the requested transfer
    InsufficientFunds,
    /// Chain id not recognized
    UnsupportedNetwork,
    /// No wallet extension present
    WalletUnavailable,
    /// Operation needs a connected session
    NotConnected,
    /// Caller-supplied input was rejected before any network traffic
    InvalidInput,
    /// Everything else
    Internal,
}

impl Error {
    /// Returns the [`ErrorKind`] for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UserRejected(_) => ErrorKind::UserRejected,
            Error::EndpointUnavailable { .. } | Error::Rpc { .. } => {
                ErrorKind::EndpointUnavailable
            }
            Error::InsufficientFunds(_) => ErrorKind::InsufficientFunds,
            Error::UnsupportedNetwork { .. } => ErrorKind::UnsupportedNetwork,
            Error::WalletUnavailable => ErrorKind::WalletUnavailable,
            Error::NotConnected => ErrorKind::NotConnected,
            Error::InvalidAddress { .. } | Error::InvalidAmount(_) | Error::Config(_) => {
                ErrorKind::InvalidInput
            }
            Error::Other(_) => ErrorKind::Internal,
        }
    }

    /// Returns true if the user declined a wallet prompt.
    ///
    /// Rejections are surfaced to the caller but must leave the session
    /// untouched; they are not endpoint failures.
    pub fn is_user_rejection(&self) -> bool {
        self.kind() == ErrorKind::UserRejected
    }

    /// Returns true if the failure came from an endpoint rather than from
    /// the user or the caller's input.
    pub fn is_endpoint_failure(&self) -> bool {
        self.kind() == ErrorKind::EndpointUnavailable
    }
}

impl ErrorKind {
    /// Classifies a numeric EIP-1193 / EIP-1474 provider error code.
    ///
    /// Wallet-connector implementations receive raw `{code, message}`
    /// objects from the extension; this mapping turns the code into the
    /// taxonomy the session branches on. `4001` is the user declining a
    /// prompt, `4902` is `wallet_switchEthereumChain` naming a chain the
    /// extension has never seen.
    pub fn from_provider_code(code: i64) -> ErrorKind {
        match code {
            4001 | 4100 => ErrorKind::UserRejected,
            4900 | 4901 => ErrorKind::WalletUnavailable,
            4902 => ErrorKind::UnsupportedNetwork,
            -32602 | -32600 => ErrorKind::InvalidInput,
            _ => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EndpointUnavailable {
            chain_id: 11155111,
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("11155111"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Error::UserRejected("declined".into()).kind(),
            ErrorKind::UserRejected
        );
        assert_eq!(
            Error::Rpc {
                method: "eth_getBalance".into(),
                reason: "timeout".into()
            }
            .kind(),
            ErrorKind::EndpointUnavailable
        );
        assert_eq!(
            Error::UnsupportedNetwork { chain_id: 31337 }.kind(),
            ErrorKind::UnsupportedNetwork
        );
        assert_eq!(Error::NotConnected.kind(), ErrorKind::NotConnected);
        assert_eq!(
            Error::InvalidAddress {
                address: "0x12".into(),
                reason: "too short".into()
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_user_rejection_predicate() {
        assert!(Error::UserRejected("no".into()).is_user_rejection());
        assert!(!Error::WalletUnavailable.is_user_rejection());
    }

    #[test]
    fn test_endpoint_failure_predicate() {
        let err = Error::EndpointUnavailable {
            chain_id: 1,
            reason: "503".into(),
        };
        assert!(err.is_endpoint_failure());
        assert!(!Error::InsufficientFunds("0 wei".into()).is_endpoint_failure());
    }

    #[test]
    fn test_provider_code_mapping() {
        assert_eq!(
            ErrorKind::from_provider_code(4001),
            ErrorKind::UserRejected
        );
        assert_eq!(
            ErrorKind::from_provider_code(4902),
            ErrorKind::UnsupportedNetwork
        );
        assert_eq!(
            ErrorKind::from_provider_code(4900),
            ErrorKind::WalletUnavailable
        );
        assert_eq!(
            ErrorKind::from_provider_code(-32602),
            ErrorKind::InvalidInput
        );
        assert_eq!(ErrorKind::from_provider_code(-32603), ErrorKind::Internal);
    }
}
