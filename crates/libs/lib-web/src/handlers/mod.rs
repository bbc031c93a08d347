//! # HTTP Handlers
//!
//! - [`health`]: `GET /healthz`
//! - [`site`]: every other path, served from the dist directory with the single-page-app
//!   fallback to `index.html`

pub mod health;
pub mod site;

pub use health::health;
pub use site::serve_site;
