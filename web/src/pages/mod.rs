//! Page modules, one per site route.

pub mod about;
pub mod business_registration;
pub mod contact;
pub mod home;
pub mod how_it_works;
pub mod not_found;

pub use about::AboutPage;
pub use business_registration::BusinessRegistrationPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFound;
