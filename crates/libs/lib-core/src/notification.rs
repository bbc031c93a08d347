//! # Notifications
//!
//! Toast notifications for user-visible events (wallet connected, connection failed,
//! wallet disconnected). The queue only holds data; the site's toaster renders it and
//! dismisses entries after a delay.

use crate::error::ConnectionError;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failure styling (red).
    Destructive,
}

/// A toast waiting to be shown. `id` is assigned by the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::info(title, description)
        }
    }

    pub fn wallet_connected(wallet_name: &str) -> Self {
        Self::info(
            "Wallet Connected",
            format!("Successfully connected to {} wallet", wallet_name),
        )
    }

    /// The error itself goes to the log; the toast keeps a generic description.
    pub fn connection_failed(err: &ConnectionError) -> Self {
        tracing::debug!(error = %err, "showing connection failure toast");
        Self::destructive("Connection Failed", "Failed to connect to wallet")
    }

    pub fn wallet_disconnected() -> Self {
        Self::info("Wallet Disconnected", "Successfully disconnected from wallet")
    }
}

/// Toasts currently on screen, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    limit: usize,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }
}

impl NotificationQueue {
    /// One toast at a time: a new toast replaces the one on screen.
    pub const DEFAULT_LIMIT: usize = 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Show `notification`, evicting the oldest toasts beyond the limit. Returns its id.
    pub fn push(&mut self, mut notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        notification.id = id;

        self.items.insert(0, notification);
        self.items.truncate(self.limit);
        id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
