//! Core key-protection types.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`error`] - Error types for key-protection operations
//! - [`constraint`] - Typed constraint sets over externally-owned bit
//!   encodings
//! - [`flags`] - Storage-protection flags for a key-store entry
//! - [`context`] - Opaque platform unlock context
//! - [`types`] - First-class types (the builder and the immutable result)

pub mod constraint;
pub mod context;
pub mod error;
pub mod flags;
pub mod types;

// Re-export commonly used items
pub use constraint::{
    AuthenticatorSet, BlockModeSet, ConstraintKind, ConstraintSet, DigestSet, PaddingSet,
    PurposeSet,
};
pub use context::UnlockContext;
pub use error::{ErrorKind, ProtectionError, ProtectionResult};
pub use flags::EntryFlags;
pub use types::{KeyProtection, KeyProtectionBuilder};
