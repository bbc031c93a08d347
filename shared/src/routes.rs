//! # Site Routes
//!
//! The client-side routes of the site. The Leptos router in `web` mounts one page per
//! variant, and the static server in `lib-web` uses [`SiteRoute::from_path`] to decide
//! whether an unknown path is a page (200) or a miss (404).

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    HowItWorks,
    Contact,
    BusinessRegistration,
}

impl SiteRoute {
    /// Every route, in navigation order.
    pub const ALL: [SiteRoute; 5] = [
        SiteRoute::Home,
        SiteRoute::About,
        SiteRoute::HowItWorks,
        SiteRoute::Contact,
        SiteRoute::BusinessRegistration,
    ];

    /// Routes listed in the navbar and footer.
    pub const NAV: [SiteRoute; 4] = [
        SiteRoute::Home,
        SiteRoute::About,
        SiteRoute::HowItWorks,
        SiteRoute::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::About => "/about",
            SiteRoute::HowItWorks => "/how-it-works",
            SiteRoute::Contact => "/contact",
            SiteRoute::BusinessRegistration => "/business-registration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::About => "About",
            SiteRoute::HowItWorks => "How It Works",
            SiteRoute::Contact => "Contact",
            SiteRoute::BusinessRegistration => "For Business",
        }
    }

    /// Resolve a request path (query string already stripped). A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<SiteRoute> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}
