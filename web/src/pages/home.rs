//! Landing page

use leptos::prelude::*;

use crate::components::{Features, Hero, WalletConnect};
use crate::state::WalletHandle;

#[component]
pub fn HomePage(wallet: WalletHandle) -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>
            <section class="wallet-section">
                <div class="card wallet-card">
                    <h2>"Your Qubic Wallet"</h2>
                    <p class="muted">
                        {move || {
                            if wallet.is_connected() {
                                "Your wallet is connected."
                            } else {
                                "Connect a wallet to see its address and balance."
                            }
                        }}
                    </p>
                    <WalletConnect wallet=wallet/>
                </div>
            </section>
            <Features/>
        </main>
    }
}
