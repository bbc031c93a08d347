//! How It Works Page

use leptos::prelude::*;

use crate::utils::constants::{BRAND, TRANSACTION_FEE};

const STEPS: [(&str, &str); 3] = [
    ("Sign Up", "Create your account with basic information"),
    ("Submit Details", "Provide your business information and verify your account"),
    ("Accept Payments", "Start accepting crypto payments from your customers"),
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <main class="page">
            <section class="page-header">
                <h1>"How "{BRAND}" Works"</h1>
                <p class="muted">"Start accepting crypto payments in just three simple steps"</p>
            </section>

            <section class="page-section">
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <li class="card step">
                                    <span class="step-number">{index + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="page-section tinted">
                <h2 class="section-title">"Transaction Fees"</h2>
                <div class="card">
                    <h3>"✓ Simple, Transparent Pricing"</h3>
                    <p>
                        "We believe in keeping things simple. That's why we only charge a "{TRANSACTION_FEE}
                        " fee per transaction, with no monthly subscription fees or hidden costs. This helps
                         maintain our ecosystem while keeping costs predictable for your business."
                    </p>
                </div>
            </section>

            <section class="page-section">
                <h2 class="section-title">"Powered by Qubic Blockchain"</h2>
                <p class="lead">
                    {BRAND}" leverages the power of Qubic blockchain technology to provide fast, secure, and
                     efficient payment processing. With features like smart contracts and instant settlements,
                     your business can operate with confidence in the digital economy."
                </p>
            </section>
        </main>
    }
}
