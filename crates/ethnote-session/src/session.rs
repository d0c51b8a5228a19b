use std::time::Duration;

use alloy::primitives::{Address, Bytes, B256, U256};
use tokio::time::MissedTickBehavior;

use ethnote_error::{Error, ErrorKind, Result};
use ethnote_provider::EndpointRegistry;

use crate::connector::{EventReceiver, TransferRequest, WalletConnector, WalletEvent};
use crate::flag::ReconnectFlag;

/// How often a connected session re-fetches its balance.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Lifecycle state of the wallet connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Process start; nothing attempted yet
    Uninitialized,
    /// A connect attempt is in flight
    Connecting,
    /// An account and network are active
    Connected,
    /// No active connection
    Disconnected,
}

/// The wallet connection state machine.
///
/// Holds the active account, chain id, and last-known balance, and owns
/// every transition between connection states. Invariant: `account` and
/// `chain_id` are both set exactly when the state is `Connected`.
///
/// The session is driven from three places: user calls
/// ([`connect`](Self::connect), [`disconnect`](Self::disconnect),
/// [`switch_network`](Self::switch_network)), wallet notifications
/// ([`handle_event`](Self::handle_event)), and the periodic balance
/// refresh. All of them funnel through `&mut self`, so each transition applies
/// atomically between suspension points. A response that outlives the
/// session state it was fetched for fails the
/// [`apply_balance`](Self::apply_balance) check and is discarded.
pub struct WalletSession<C, F> {
    connector: C,
    flag: F,
    networks: EndpointRegistry,
    state: ConnectionState,
    account: Option<Address>,
    chain_id: Option<u64>,
    balance: U256,
    refresh_interval: Duration,
}

impl<C, F> WalletSession<C, F>
where
    C: WalletConnector,
    F: ReconnectFlag,
{
    /// Creates a session in the `Uninitialized` state.
    pub fn new(connector: C, flag: F, networks: EndpointRegistry) -> Self {
        Self {
            connector,
            flag,
            networks,
            state: ConnectionState::Uninitialized,
            account: None,
            chain_id: None,
            balance: U256::ZERO,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Overrides the balance refresh cadence.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Active account, set exactly while `Connected`.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Active chain id, set exactly while `Connected`.
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Balance in wei at the last refresh.
    pub fn balance(&self) -> U256 {
        self.balance
    }

    /// Returns true while an account and network are active.
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// The endpoint registry this session switches networks against.
    pub fn networks(&self) -> &EndpointRegistry {
        &self.networks
    }

    // ========================================================================
    // Lifecycle transitions
    // ========================================================================

    /// Runs the process-start transition.
    ///
    /// No extension lands the session in `Disconnected`. With an extension
    /// present, the persisted reconnect flag decides whether a silent
    /// connect attempt runs; its failure is swallowed, and the user can still
    /// connect explicitly.
    pub async fn startup(&mut self) {
        if !self.connector.is_available().await {
            self.reset_to_disconnected();
            return;
        }
        if self.flag.load() {
            self.connect_silent().await;
        } else {
            self.reset_to_disconnected();
        }
    }

    /// Explicit, user-initiated connect.
    ///
    /// Failures propagate for display; the session lands in `Disconnected`,
    /// never stuck in `Connecting`.
    pub async fn connect(&mut self) -> Result<()> {
        match self.try_connect().await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.reset_to_disconnected();
                Err(e)
            }
        }
    }

    /// Explicit disconnect: clears the session and the reconnect flag.
    ///
    /// The extension's own permission grant is left untouched.
    pub fn disconnect(&mut self) {
        self.reset_to_disconnected();
        self.flag.store(false);
    }

    /// Applies a wallet notification.
    pub async fn handle_event(&mut self, event: WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.first() {
                None => {
                    tracing::info!("wallet revoked account access");
                    self.reset_to_disconnected();
                }
                Some(first) if self.account != Some(*first) => {
                    tracing::info!(account = %first, "active account changed");
                    self.connect_silent().await;
                }
                Some(_) => {}
            },
            WalletEvent::ChainChanged => {
                tracing::info!("network changed, rebuilding session");
                self.reset_to_disconnected();
                self.connect_silent().await;
            }
        }
    }

    async fn connect_silent(&mut self) {
        if let Err(e) = self.try_connect().await {
            tracing::warn!(error = %e, "silent connect failed");
            self.reset_to_disconnected();
        }
    }

    async fn try_connect(&mut self) -> Result<()> {
        if !self.connector.is_available().await {
            return Err(Error::WalletUnavailable);
        }
        self.reset_identity();
        self.state = ConnectionState::Connecting;

        let accounts = self.connector.request_accounts().await?;
        let account = *accounts
            .first()
            .ok_or_else(|| Error::UserRejected("wallet returned no accounts".to_string()))?;
        let chain_id = self.connector.chain_id().await?;
        let balance = self.connector.balance_of(account).await?;

        self.state = ConnectionState::Connected;
        self.account = Some(account);
        self.chain_id = Some(chain_id);
        self.balance = balance;
        self.flag.store(true);
        Ok(())
    }

    fn reset_to_disconnected(&mut self) {
        self.reset_identity();
        self.state = ConnectionState::Disconnected;
    }

    fn reset_identity(&mut self) {
        self.account = None;
        self.chain_id = None;
        self.balance = U256::ZERO;
    }

    // ========================================================================
    // Balance refresh
    // ========================================================================

    /// Re-fetches the balance of the active account.
    ///
    /// A no-op unless connected; fetch failures are logged and swallowed.
    /// A stale balance beats tearing down the session.
    pub async fn refresh_balance(&mut self) {
        let Some(account) = self.account.filter(|_| self.is_connected()) else {
            return;
        };
        match self.connector.balance_of(account).await {
            Ok(wei) => {
                self.apply_balance(account, wei);
            }
            Err(e) => tracing::warn!(error = %e, "balance refresh failed"),
        }
    }

    /// Applies a fetched balance, unless the session moved on.
    ///
    /// The result only lands while the session is still connected to the
    /// account it was fetched for; anything else is a late response from a
    /// superseded operation and is dropped. Returns whether it landed.
    pub fn apply_balance(&mut self, target: Address, wei: U256) -> bool {
        if self.is_connected() && self.account == Some(target) {
            self.balance = wei;
            true
        } else {
            tracing::debug!(account = %target, "discarding stale balance response");
            false
        }
    }

    // ========================================================================
    // Wallet operations
    // ========================================================================

    /// Submits a value transfer with an optional note, returning its hash.
    ///
    /// A blank note attaches no payload at all. Wallet rejection and
    /// insufficient funds propagate to the caller; the session state is
    /// not affected either way.
    pub async fn send_transfer(&self, to: Address, value: U256, note: &str) -> Result<B256> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        let payload = ethnote_codec::note_payload(note).map(Bytes::from);
        self.connector
            .send_transfer(TransferRequest { to, value, payload })
            .await
    }

    /// Asks the wallet to switch to another network.
    ///
    /// A chain the wallet does not know is added from the registry's
    /// profile, then the switch is retried once. The session itself is
    /// never transitioned here; the wallet's `ChainChanged` notification
    /// drives the actual state change.
    pub async fn switch_network(&self, target: u64) -> Result<()> {
        match self.connector.switch_chain(target).await {
            Err(e) if e.kind() == ErrorKind::UnsupportedNetwork => {
                let params = self.networks.add_chain_params(target)?;
                tracing::info!(chain_id = target, "adding network to wallet");
                self.connector.add_chain(&params).await?;
                self.connector.switch_chain(target).await
            }
            other => other,
        }
    }

    // ========================================================================
    // Driver
    // ========================================================================

    /// Drives the session from the wallet event queue, refreshing the
    /// balance on a fixed cadence, until the queue closes.
    pub async fn drive(&mut self, events: &mut EventReceiver) {
        let mut ticker = tokio::time::interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => break,
                },
                _ = ticker.tick() => self.refresh_balance().await,
            }
        }
    }
}
