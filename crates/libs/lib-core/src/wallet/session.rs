//! Wallet connection state.

use shared::WalletAccount;

use super::connector::WalletConnector;
use crate::error::ConnectionError;

/// Whether a wallet is connected, and to which account.
///
/// Address and balance live inside `Connected`, so one is never set without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(WalletAccount),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    pub fn account(&self) -> Option<&WalletAccount> {
        match self {
            ConnectionState::Connected(account) => Some(account),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.account().map(|account| account.address.as_str())
    }

    pub fn balance(&self) -> Option<&str> {
        self.account().map(|account| account.balance.as_str())
    }
}

/// Result of a connect request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The session is now connected to this account.
    Connected(WalletAccount),
    /// Already connected; nothing changed.
    AlreadyConnected,
    /// Another attempt is still pending; nothing changed.
    InFlight,
    /// The session was disconnected while the attempt was pending; its result was dropped.
    Abandoned,
}

/// Connection state plus the bookkeeping for a pending connect attempt.
///
/// A connect is split in two so the UI can run the connector on its own task:
/// [`begin_connect`](Self::begin_connect) before awaiting the connector,
/// [`finish_connect`](Self::finish_connect) with its result. [`connect`](Self::connect)
/// does both in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    state: ConnectionState,
    in_flight: bool,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// True while a connect attempt is pending.
    pub fn is_connecting(&self) -> bool {
        self.in_flight
    }

    /// Start a connect attempt.
    ///
    /// Returns `None` when the caller should go on and await the connector, or the
    /// outcome to report right away when the attempt is a no-op.
    pub fn begin_connect(&mut self) -> Option<ConnectOutcome> {
        if self.state.is_connected() {
            tracing::debug!("connect ignored: wallet already connected");
            return Some(ConnectOutcome::AlreadyConnected);
        }
        if self.in_flight {
            tracing::debug!("connect ignored: attempt already in flight");
            return Some(ConnectOutcome::InFlight);
        }

        self.in_flight = true;
        None
    }

    /// Apply the connector's result to a pending attempt.
    ///
    /// On failure the state is left as it was and the error is handed back.
    pub fn finish_connect(
        &mut self,
        result: Result<WalletAccount, ConnectionError>,
    ) -> Result<ConnectOutcome, ConnectionError> {
        if !self.in_flight {
            tracing::debug!("connect result dropped: attempt was abandoned");
            return Ok(ConnectOutcome::Abandoned);
        }
        self.in_flight = false;

        match result {
            Ok(account) => {
                tracing::info!(address = %account.address, "wallet connected");
                self.state = ConnectionState::Connected(account.clone());
                Ok(ConnectOutcome::Connected(account))
            }
            Err(err) => {
                tracing::warn!(error = %err, "wallet connection failed");
                Err(err)
            }
        }
    }

    /// Connect with `connector`, awaiting it in place.
    pub async fn connect<C>(&mut self, connector: &C) -> Result<ConnectOutcome, ConnectionError>
    where
        C: WalletConnector + ?Sized,
    {
        if let Some(outcome) = self.begin_connect() {
            return Ok(outcome);
        }

        tracing::debug!(wallet = connector.name(), "connecting wallet");
        let result = connector.connect().await;
        self.finish_connect(result)
    }

    /// Drop the connection (and any pending attempt).
    pub fn disconnect(&mut self) {
        if self.state.is_connected() {
            tracing::info!("wallet disconnected");
        }
        self.state = ConnectionState::Disconnected;
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::connector::{PlaceholderConnector, PLACEHOLDER_ADDRESS, PLACEHOLDER_BALANCE};
    use async_trait::async_trait;

    struct FailingConnector;

    #[async_trait(?Send)]
    impl WalletConnector for FailingConnector {
        fn name(&self) -> &'static str {
            "Failing"
        }

        async fn connect(&self) -> Result<WalletAccount, ConnectionError> {
            Err(ConnectionError::Unavailable("no wallet extension".to_string()))
        }
    }

    fn assert_fully_disconnected(session: &WalletSession) {
        assert!(!session.is_connected());
        assert_eq!(session.state().address(), None);
        assert_eq!(session.state().balance(), None);
    }

    #[test]
    fn test_starts_disconnected() {
        let session = WalletSession::new();
        assert_fully_disconnected(&session);
        assert!(!session.is_connecting());
    }

    #[tokio::test]
    async fn test_connect_sets_address_and_balance_together() {
        let mut session = WalletSession::new();
        let outcome = session.connect(&PlaceholderConnector).await.unwrap();

        let expected = WalletAccount::new(PLACEHOLDER_ADDRESS, PLACEHOLDER_BALANCE);
        assert_eq!(outcome, ConnectOutcome::Connected(expected));
        assert!(session.is_connected());
        assert_eq!(session.state().address(), Some(PLACEHOLDER_ADDRESS));
        assert_eq!(session.state().balance(), Some(PLACEHOLDER_BALANCE));
        assert!(!session.is_connecting());
    }

    #[tokio::test]
    async fn test_failed_connect_leaves_state_unchanged() {
        let mut session = WalletSession::new();
        let err = session.connect(&FailingConnector).await.unwrap_err();

        assert!(matches!(err, ConnectionError::Unavailable(_)));
        assert_fully_disconnected(&session);
        assert!(!session.is_connecting());
    }

    #[tokio::test]
    async fn test_disconnect_from_any_state() {
        let mut fresh = WalletSession::new();
        fresh.disconnect();
        assert_fully_disconnected(&fresh);

        let mut connected = WalletSession::new();
        connected.connect(&PlaceholderConnector).await.unwrap();
        connected.disconnect();
        assert_fully_disconnected(&connected);

        let mut pending = WalletSession::new();
        assert_eq!(pending.begin_connect(), None);
        pending.disconnect();
        assert_fully_disconnected(&pending);
        assert!(!pending.is_connecting());
    }

    #[tokio::test]
    async fn test_reconnect_matches_single_connect() {
        let mut once = WalletSession::new();
        once.connect(&PlaceholderConnector).await.unwrap();

        let mut cycled = WalletSession::new();
        cycled.connect(&PlaceholderConnector).await.unwrap();
        cycled.disconnect();
        cycled.connect(&PlaceholderConnector).await.unwrap();

        assert_eq!(once, cycled);
    }

    #[tokio::test]
    async fn test_second_connect_is_noop() {
        let mut session = WalletSession::new();
        session.connect(&PlaceholderConnector).await.unwrap();
        let before = session.clone();

        let outcome = session.connect(&FailingConnector).await.unwrap();
        assert_eq!(outcome, ConnectOutcome::AlreadyConnected);
        assert_eq!(session, before);
    }

    #[test]
    fn test_concurrent_begin_is_rejected() {
        let mut session = WalletSession::new();
        assert_eq!(session.begin_connect(), None);
        assert!(session.is_connecting());
        assert_eq!(session.begin_connect(), Some(ConnectOutcome::InFlight));

        let account = WalletAccount::new("addr", "1.00");
        let outcome = session.finish_connect(Ok(account.clone())).unwrap();
        assert_eq!(outcome, ConnectOutcome::Connected(account));
    }

    #[test]
    fn test_result_after_disconnect_is_dropped() {
        let mut session = WalletSession::new();
        assert_eq!(session.begin_connect(), None);
        session.disconnect();

        let outcome = session
            .finish_connect(Ok(WalletAccount::new("late", "9.99")))
            .unwrap();
        assert_eq!(outcome, ConnectOutcome::Abandoned);
        assert_fully_disconnected(&session);
    }
}
