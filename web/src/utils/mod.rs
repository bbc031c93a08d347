//! Helpers shared by pages and components.

pub mod constants;
pub mod dom;
pub mod format;
