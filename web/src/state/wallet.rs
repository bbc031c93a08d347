//! Wallet state management

use leptos::prelude::*;
use lib_core::{ConnectOutcome, Notification, PlaceholderConnector, WalletConnector, WalletSession};
use shared::WalletAccount;

use super::notifications::Notifier;

/// Wallet session shared by the navbar and the home page.
///
/// Created once by `App`. Connect results and disconnects are reported through the
/// notifier.
#[derive(Clone, Copy)]
pub struct WalletHandle {
    session: RwSignal<WalletSession>,
    notifier: Notifier,
}

impl WalletHandle {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            session: RwSignal::new(WalletSession::new()),
            notifier,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|session| session.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.session.with(|session| session.is_connecting())
    }

    pub fn account(&self) -> Option<WalletAccount> {
        self.session.with(|session| session.state().account().cloned())
    }

    /// Start connecting unless connected or already connecting.
    pub fn connect(&self) {
        match self.session.try_update(|session| session.begin_connect()) {
            Some(None) => {}
            Some(Some(outcome)) => {
                log::debug!("connect skipped: {:?}", outcome);
                return;
            }
            None => return,
        }

        let session = self.session;
        let notifier = self.notifier;
        leptos::task::spawn_local(async move {
            let connector = PlaceholderConnector;
            let result = connector.connect().await;

            let Some(finished) = session.try_update(|session| session.finish_connect(result)) else {
                return;
            };

            match finished {
                Ok(ConnectOutcome::Connected(account)) => {
                    log::info!("connected to {} wallet {}", connector.name(), account.address);
                    notifier.notify(Notification::wallet_connected(connector.name()));
                }
                Ok(outcome) => log::debug!("connect finished without change: {:?}", outcome),
                Err(err) => {
                    log::error!("Error connecting wallet: {}", err);
                    notifier.notify(Notification::connection_failed(&err));
                }
            }
        });
    }

    pub fn disconnect(&self) {
        self.session.update(|session| session.disconnect());
        log::info!("wallet disconnected");
        self.notifier.notify(Notification::wallet_disconnected());
    }
}
