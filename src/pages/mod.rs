//! Page objects over the shop UI
//!
//! Each page binds its `data-test` locators at construction and exposes
//! intention-revealing actions and assertions. No state beyond the bound
//! locators and the shared session handle.

mod checkout;
mod login;

pub use checkout::CheckoutPage;
pub use login::LoginPage;
