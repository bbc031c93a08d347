//! Toast stack

use leptos::prelude::*;
use lib_core::NotificationVariant;

use crate::state::Notifier;

#[component]
pub fn Toaster(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                notifier
                    .items()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let destructive = toast.variant == NotificationVariant::Destructive;
                        view! {
                            <div class="toast" class:destructive=destructive>
                                <div class="toast-body">
                                    <p class="toast-title">{toast.title}</p>
                                    <p class="toast-description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
