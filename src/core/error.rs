//! Error types for key-protection operations.
//!
//! This module provides a unified error type for builder construction,
//! finalization, and accessor failures. Every failure is surfaced
//! synchronously to the immediate caller; nothing is logged, swallowed,
//! or retried internally.

use thiserror::Error;

/// Coarse classification of a [`ProtectionError`].
///
/// [`InvalidArgument`](ErrorKind::InvalidArgument) failures are caller
/// mistakes visible at the call site: a missing unlock context, or an
/// out-of-range duration handed to the builder.
/// [`InvalidState`](ErrorKind::InvalidState) failures are reads the value
/// cannot answer; callers recover by checking the corresponding guard first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value supplied by the caller is invalid.
    InvalidArgument,
    /// The value cannot answer the requested read.
    InvalidState,
}

/// Errors that can occur when building or reading key-protection parameters.
#[derive(Debug, Error)]
pub enum ProtectionError {
    /// Builder construction requires an unlock context to be present.
    #[error("unlock context must be provided")]
    MissingUnlockContext,

    /// The user-authentication validity duration is neither non-negative
    /// nor the unlimited-reuse sentinel `-1`.
    #[error("user authentication validity duration must be -1 or non-negative, got {0}")]
    InvalidAuthValidityDuration(i32),

    /// A digest restriction was read from parameters built without one.
    #[error("digest restrictions not specified")]
    DigestsNotSpecified,
}

impl ProtectionError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingUnlockContext | Self::InvalidAuthValidityDuration(_) => {
                ErrorKind::InvalidArgument
            }
            Self::DigestsNotSpecified => ErrorKind::InvalidState,
        }
    }
}

/// Result type alias for key-protection operations.
pub type ProtectionResult<T> = Result<T, ProtectionError>;
