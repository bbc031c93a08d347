//! Navigation Bar Component

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::SiteRoute;

use super::WalletConnect;
use crate::state::WalletHandle;
use crate::utils::constants::BRAND;

#[component]
pub fn Navbar(wallet: WalletHandle) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href=SiteRoute::Home.path() attr:class="brand">
                    <span class="brand-mark">{BRAND}</span>
                </A>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class="nav-menu" class:open=move || menu_open.get()>
                    <ul class="nav-links">
                        {SiteRoute::NAV
                            .iter()
                            .map(move |route| {
                                view! {
                                    <li on:click=close_menu>
                                        <A href=route.path()>{route.label()}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="nav-actions">
                        <span on:click=close_menu>
                            <A href=SiteRoute::BusinessRegistration.path() attr:class="btn btn-outline">
                                {SiteRoute::BusinessRegistration.label()}
                            </A>
                        </span>
                        <WalletConnect wallet=wallet compact=true/>
                    </div>
                </div>
            </div>
        </nav>
    }
}
