// Core modules
pub mod address;
pub mod group;
pub mod package;
pub mod store;
pub mod user;

// Re-export commonly used types
pub use address::{PersistableAddress, ReadableAddress, ShippingOrigin};
pub use group::{Group, UnknownGroup};
pub use package::{PackageDetails, PackageRecord, ShippingPackageType};
pub use store::{Language, MerchantStore, DEFAULT_STORE_CODE};
pub use user::AuthenticatedUser;

use lazy_static::lazy_static;
use regex::Regex;

// Store and package codes share the same alphabet
lazy_static! {
    pub static ref CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{1,100}$").unwrap();
}

/// Returns true when `code` is a valid store or package code.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
