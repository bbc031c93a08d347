//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;
use shared::SiteRoute;

use crate::utils::constants::{BRAND, QUBIC_URL, SOCIAL_LINKS, TAGLINE, WHITEPAPER_URL};
use crate::utils::dom::current_year;
use crate::utils::format::copyright_line;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <span class="brand-mark">{BRAND}</span>
                    <p>{TAGLINE}". Simple, secure, and efficient."</p>
                </div>

                <div class="footer-column">
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><A href=SiteRoute::About.path()>"About Us"</A></li>
                        <li><A href=SiteRoute::HowItWorks.path()>{SiteRoute::HowItWorks.label()}</A></li>
                        <li><A href=SiteRoute::Contact.path()>{SiteRoute::Contact.label()}</A></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Resources"</h4>
                    <ul>
                        <li><a href=QUBIC_URL target="_blank" rel="noopener noreferrer">"Qubic.org"</a></li>
                        <li><a href=WHITEPAPER_URL target="_blank" rel="noopener noreferrer">"Whitepaper"</a></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Connect"</h4>
                    <ul class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, url)| {
                                view! {
                                    <li><a href=*url aria-label=*name>{*name}</a></li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}
