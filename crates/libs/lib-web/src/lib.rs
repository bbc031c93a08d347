//! # Web Library
//!
//! Static-file server for the compiled RipaPay site: configuration, the axum router
//! with its single-page-app fallback, and request middleware.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{create_router, start_server, SiteState};
