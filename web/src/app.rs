//! RipaPay Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar, Toaster};
use crate::pages::{AboutPage, BusinessRegistrationPage, ContactPage, HomePage, HowItWorksPage, NotFound};
use crate::state::{Notifier, WalletHandle};

#[component]
pub fn App() -> impl IntoView {
    let notifier = Notifier::new();
    let wallet = WalletHandle::new(notifier);

    view! {
        <Router>
            <div class="app-container">
                <Navbar wallet=wallet/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=move || view! { <HomePage wallet=wallet/> }/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/how-it-works") view=HowItWorksPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/business-registration") view=BusinessRegistrationPage/>
                </Routes>
                <Footer/>
                <Toaster notifier=notifier/>
            </div>
        </Router>
    }
}
