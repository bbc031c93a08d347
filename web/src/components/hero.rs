//! Landing hero

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::SiteRoute;

use crate::utils::constants::BRAND;

#[component]
pub fn Hero() -> impl IntoView {
    let navigate = use_navigate();
    let go_register = {
        let navigate = navigate.clone();
        move |_: MouseEvent| navigate(SiteRoute::BusinessRegistration.path(), Default::default())
    };
    let learn_more = move |_: MouseEvent| navigate(SiteRoute::HowItWorks.path(), Default::default());

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    "Next-Gen "<span class="accent">"Blockchain Payments"</span>" for Your Business"
                </h1>
                <p class="hero-subtitle">
                    "Powered by Qubic blockchain technology, "{BRAND}
                    " enables secure, instant, and low-cost cryptocurrency payments for businesses worldwide."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-large" on:click=go_register>
                        {SiteRoute::BusinessRegistration.label()}
                    </button>
                    <button class="btn btn-outline btn-large" on:click=learn_more>
                        "Learn More"
                    </button>
                </div>
                <p class="hero-note">"🛡 Enterprise-grade security with blockchain technology"</p>
            </div>
        </section>
    }
}
