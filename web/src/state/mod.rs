//! Reactive handles created by `App` and handed down as props.

pub mod notifications;
pub mod wallet;

pub use notifications::Notifier;
pub use wallet::WalletHandle;
