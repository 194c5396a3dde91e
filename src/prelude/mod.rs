//! Ergonomic layer for key-protection parameters.
//!
//! The prelude re-exports everything needed to configure and build a
//! [`KeyProtection`] with a single import.
//!
//! # Usage
//!
//! ```rust
//! use keyprotect::prelude::*;
//! ```

pub use crate::core::constraint::{
    AuthenticatorSet, BlockModeSet, ConstraintKind, ConstraintSet, DigestSet, PaddingSet,
    PurposeSet,
};
pub use crate::core::context::UnlockContext;
pub use crate::core::error::{ErrorKind, ProtectionError, ProtectionResult};
pub use crate::core::flags::EntryFlags;
pub use crate::core::types::{KeyProtection, KeyProtectionBuilder};
