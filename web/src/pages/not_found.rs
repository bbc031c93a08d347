use leptos::prelude::*;
use leptos_router::components::A;
use shared::SiteRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="page not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href=SiteRoute::Home.path() attr:class="btn">"Go to Home"</A>
            </div>
        </main>
    }
}
