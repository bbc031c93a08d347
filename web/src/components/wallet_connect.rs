//! Wallet connect / status widget.

use leptos::prelude::*;

use crate::state::WalletHandle;
use crate::utils::format::{address_line, balance_line};

/// Connect button, or the connected account with a Disconnect button.
///
/// `compact` drops the balance line for the navbar.
#[component]
pub fn WalletConnect(wallet: WalletHandle, #[prop(optional)] compact: bool) -> impl IntoView {
    move || match wallet.account() {
        Some(account) => view! {
            <div class="wallet-status" class:compact=compact>
                <div class="wallet-details">
                    <p class="wallet-address">{address_line(&account)}</p>
                    {(!compact).then(|| view! { <p class="wallet-balance">{balance_line(&account)}</p> })}
                </div>
                <button class="btn btn-outline" on:click=move |_| wallet.disconnect()>
                    "Disconnect"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <button
                class="btn"
                disabled=move || wallet.is_connecting()
                on:click=move |_| wallet.connect()
            >
                {move || if wallet.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        }
        .into_any(),
    }
}
