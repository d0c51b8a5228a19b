use alloy::primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use tokio::sync::mpsc;

use ethnote_error::Result;
use ethnote_provider::AddChainParams;

/// A plain value transfer, optionally carrying payload bytes.
///
/// `payload` stays `None` for transfers without a note; some wallets
/// reject internal-account transfers that carry an empty `data` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient address
    pub to: Address,
    /// Amount in wei
    pub value: U256,
    /// Payload bytes to attach, if any
    pub payload: Option<Bytes>,
}

/// Notifications pushed by the wallet extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The authorized account list changed; empty means access was revoked.
    AccountsChanged(Vec<Address>),
    /// The active network changed.
    ChainChanged,
}

/// Sending half of the wallet event queue, held by connector glue.
pub type EventSender = mpsc::UnboundedSender<WalletEvent>;

/// Receiving half of the wallet event queue, drained by the session.
pub type EventReceiver = mpsc::UnboundedReceiver<WalletEvent>;

/// Creates the event queue connecting a wallet's notifications to the
/// session state machine.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// The browser wallet extension, as the session consumes it.
///
/// Implementations bridge to an EIP-1193 provider object and classify its
/// `{code, message}` errors through
/// [`ErrorKind::from_provider_code`](ethnote_error::ErrorKind::from_provider_code):
/// a declined prompt must surface as `UserRejected`, a
/// `wallet_switchEthereumChain` call naming an unknown chain as
/// `UnsupportedNetwork`.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Returns true if a wallet extension is present at all.
    async fn is_available(&self) -> bool;

    /// Requests account access, prompting the user if needed.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Returns the chain id of the wallet's active network.
    async fn chain_id(&self) -> Result<u64>;

    /// Returns the wei balance of an account on the active network.
    async fn balance_of(&self, account: Address) -> Result<U256>;

    /// Signs and submits a value transfer, returning its hash.
    async fn send_transfer(&self, request: TransferRequest) -> Result<B256>;

    /// Asks the wallet to switch its active network.
    async fn switch_chain(&self, chain_id: u64) -> Result<()>;

    /// Asks the wallet to add a network it does not know yet.
    async fn add_chain(&self, params: &AddChainParams) -> Result<()>;
}
