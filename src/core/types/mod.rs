//! First-class key-protection types.
//!
//! - [`KeyProtection`] - immutable key-usage and storage-protection
//!   parameters
//! - [`KeyProtectionBuilder`] - validating builder that produces them

mod builder;
mod protection;

pub use builder::KeyProtectionBuilder;
pub use protection::KeyProtection;
