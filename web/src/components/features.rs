//! Feature grid on the landing page.

use leptos::prelude::*;

use crate::utils::constants::BRAND;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "👛",
        "Multi-Wallet Support",
        "Connect and manage multiple blockchain wallets seamlessly with our platform.",
    ),
    (
        "⚡",
        "Instant Settlements",
        "Experience lightning-fast transactions powered by Qubic blockchain technology.",
    ),
    (
        "🛡",
        "Enterprise Security",
        "Bank-grade security measures to protect your business transactions.",
    ),
    (
        "🌍",
        "Global Reach",
        "Accept payments from customers worldwide with minimal transaction fees.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="section-title">"Why Choose "<span class="accent">{BRAND}</span></h2>
            <p class="section-subtitle">
                "Experience the future of business payments with our comprehensive blockchain-powered platform."
            </p>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="card feature-card">
                                <span class="feature-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
