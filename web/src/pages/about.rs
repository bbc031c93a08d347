//! About Page

use leptos::prelude::*;

use crate::utils::constants::{BRAND, TRANSACTION_FEE};

#[component]
pub fn AboutPage() -> impl IntoView {
    let values = [
        (
            "No Monthly Fees",
            format!(
                "We only charge {} per transaction, with no hidden costs or monthly subscriptions.",
                TRANSACTION_FEE
            ),
        ),
        (
            "Qubic Technology",
            "Powered by the innovative Qubic blockchain for fast and secure transactions.".to_string(),
        ),
        (
            "Easy Setup",
            "Get started in just 3 simple steps and begin accepting payments immediately.".to_string(),
        ),
    ];

    view! {
        <main class="page">
            <section class="page-header">
                <h1>"About "{BRAND}</h1>
                <p class="muted">"Revolutionizing payments with Qubic blockchain technology"</p>
            </section>

            <section class="page-section">
                <h2>"Our Mission"</h2>
                <p>
                    "At "{BRAND}", we're building the future of payments by leveraging the power of the Qubic
                     blockchain. Our mission is to make cryptocurrency payments accessible, secure, and
                     efficient for businesses worldwide."
                </p>
            </section>

            <section class="page-section tinted">
                <h2 class="section-title">"Why Choose "{BRAND}"?"</h2>
                <div class="card-grid three">
                    {values
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
