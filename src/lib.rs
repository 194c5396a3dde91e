//! Validated key-usage and storage-protection parameters for secure
//! key-store entries.
//!
//! A key store entry carries more than key material: it carries constraints
//! on when and how the key may be used, and on how the store must protect it
//! at rest. This crate produces that constraint specification as an
//! immutable, pre-validated value, built through a fluent builder and handed
//! opaquely to the key-provisioning subsystem that enforces it.
//!
//! # Quick Start
//!
//! ```rust
//! use keyprotect::prelude::*;
//!
//! // Bit values come from the key store's constraints module.
//! const PURPOSE_ENCRYPT: u32 = 1 << 0;
//! const PURPOSE_DECRYPT: u32 = 1 << 1;
//!
//! let ctx = UnlockContext::new();
//! let protection = KeyProtectionBuilder::new(Some(&ctx))
//!     .expect("context is present")
//!     .encryption_required(true)
//!     .purposes(PurposeSet::from_bits(PURPOSE_ENCRYPT | PURPOSE_DECRYPT))
//!     .user_auth_validity_duration_secs(300)
//!     .build()
//!     .expect("parameters are valid");
//!
//! assert!(protection.is_encryption_required());
//! assert!(!protection.is_digests_specified());
//! ```
//!
//! # Constraint Families
//!
//! Each restriction is a typed set over an externally-owned integer bit
//! encoding; an empty set asserts no restriction.
//!
//! | Set | Restricts |
//! |-----|-----------|
//! | [`PurposeSet`] | Operations the key may perform (encrypt, sign, ...) |
//! | [`PaddingSet`] | Padding schemes |
//! | [`DigestSet`] | Digest algorithms (unspecified is distinct from empty) |
//! | [`BlockModeSet`] | Block modes |
//! | [`AuthenticatorSet`] | User authenticators that unlock use of the key |
//!
//! # Validation
//!
//! Setters store without validating; [`KeyProtectionBuilder::build`]
//! validates and either returns a complete [`KeyProtection`] snapshot or
//! fails with no observable side effect. The builder stays usable either
//! way, and repeated builds yield equal, independent values.
//!
//! # Concurrency
//!
//! Everything here is a synchronous in-memory value transformation. The
//! builder is plain mutable data; share it across threads only with
//! external synchronization. The built [`KeyProtection`] is immutable and
//! safe for unsynchronized concurrent reads.
//!
//! # Modules
//!
//! - [`core`] - Core types
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::constraint::{
    AuthenticatorSet, BlockModeSet, ConstraintKind, ConstraintSet, DigestSet, PaddingSet,
    PurposeSet,
};
pub use crate::core::context::UnlockContext;
pub use crate::core::error::{ErrorKind, ProtectionError, ProtectionResult};
pub use crate::core::flags::EntryFlags;
pub use crate::core::types::{KeyProtection, KeyProtectionBuilder};
