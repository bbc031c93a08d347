//! Toast state

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::{Notification, NotificationQueue};

use crate::utils::constants::TOAST_DURATION_MS;

/// Handle to the toast queue. Each toast is dismissed after [`TOAST_DURATION_MS`].
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    pub fn notify(&self, notification: Notification) {
        log::debug!("toast: {} - {}", notification.title, notification.description);

        let Some(id) = self.queue.try_update(|queue| queue.push(notification)) else {
            return;
        };

        let queue = self.queue;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            queue.try_update(|queue| queue.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Toasts on screen, newest first.
    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|queue| queue.items().to_vec())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
