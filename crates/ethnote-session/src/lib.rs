//! # ethnote Session
//!
//! Manages the lifecycle of a browser-wallet connection: account, chain id,
//! and native balance, held in a [`WalletSession`] that moves through
//! `Uninitialized → Connecting → Connected/Disconnected`.
//!
//! The wallet extension itself is behind the [`WalletConnector`] port; its
//! `accountsChanged`/`chainChanged` notifications arrive as [`WalletEvent`]s
//! over an mpsc channel, so "event arrived" and "transition applied" are
//! separate steps. Every mutation of the session goes through a transition
//! method (there are no ad hoc field writes), and a balance fetched before
//! a disconnect is discarded on arrival rather than resurrecting the
//! cleared session.
//!
//! ```no_run
//! # use ethnote_session::{WalletSession, MemoryFlag, event_channel};
//! # use ethnote_provider::EndpointRegistry;
//! # async fn run(connector: impl ethnote_session::WalletConnector) {
//! let (sender, mut events) = event_channel();
//! let mut session = WalletSession::new(
//!     connector,
//!     MemoryFlag::new(true),
//!     EndpointRegistry::with_defaults(),
//! );
//! session.startup().await;
//! session.drive(&mut events).await;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connector;
mod flag;
mod session;

pub use connector::{
    event_channel, EventReceiver, EventSender, TransferRequest, WalletConnector, WalletEvent,
};
pub use flag::{FileFlag, MemoryFlag, ReconnectFlag};
pub use session::{ConnectionState, WalletSession, DEFAULT_REFRESH_INTERVAL};
