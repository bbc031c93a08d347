//! UI Components

pub mod features;
pub mod footer;
pub mod form;
pub mod hero;
pub mod navbar;
pub mod registration;
pub mod toaster;
pub mod wallet_connect;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use toaster::Toaster;
pub use wallet_connect::WalletConnect;
