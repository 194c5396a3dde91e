//! `KeyProtectionBuilder`: validating builder for [`KeyProtection`].

use chrono::{DateTime, Utc};

use crate::core::constraint::{AuthenticatorSet, BlockModeSet, DigestSet, PaddingSet, PurposeSet};
use crate::core::context::UnlockContext;
use crate::core::error::{ProtectionError, ProtectionResult};
use crate::core::flags::EntryFlags;
use crate::core::types::KeyProtection;

/// Builder for [`KeyProtection`] values.
///
/// The builder starts from safe defaults (no restrictions, encryption not
/// required, unlimited authentication reuse) and accumulates candidate
/// values through chained setters. Setters store without validating; all
/// validation happens in [`build`](Self::build). Later calls for the same
/// field override earlier ones.
///
/// Building does not consume the builder: it may be reused, and repeated
/// builds without further setter calls yield equal, independent values.
///
/// # Example
///
/// ```rust
/// use keyprotect::prelude::*;
///
/// let ctx = UnlockContext::new();
/// let protection = KeyProtectionBuilder::new(Some(&ctx))
///     .expect("context is present")
///     .encryption_required(true)
///     .user_auth_validity_duration_secs(300)
///     .build()
///     .expect("parameters are valid");
///
/// assert!(protection.is_encryption_required());
/// assert_eq!(protection.user_auth_validity_duration_secs(), 300);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyProtectionBuilder {
    flags: EntryFlags,
    validity_start: Option<DateTime<Utc>>,
    validity_for_origination_end: Option<DateTime<Utc>>,
    validity_for_consumption_end: Option<DateTime<Utc>>,
    purposes: PurposeSet,
    paddings: PaddingSet,
    digests: Option<DigestSet>,
    block_modes: BlockModeSet,
    user_authenticators: AuthenticatorSet,
    user_auth_validity_duration_secs: i32,
}

impl KeyProtectionBuilder {
    /// Creates a builder with safe defaults.
    ///
    /// The unlock context is the platform's hook for prompting the user to
    /// unlock or initialize the key store. It is checked for presence and
    /// not retained.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::MissingUnlockContext`] when `ctx` is
    /// `None`.
    pub fn new(ctx: Option<&UnlockContext>) -> ProtectionResult<Self> {
        if ctx.is_none() {
            return Err(ProtectionError::MissingUnlockContext);
        }

        Ok(Self {
            flags: EntryFlags::NONE,
            validity_start: None,
            validity_for_origination_end: None,
            validity_for_consumption_end: None,
            purposes: PurposeSet::NONE,
            paddings: PaddingSet::NONE,
            digests: None,
            block_modes: BlockModeSet::NONE,
            user_authenticators: AuthenticatorSet::NONE,
            user_auth_validity_duration_secs: -1,
        })
    }

    /// Requires (or no longer requires) the entry to be encrypted at rest.
    ///
    /// Requiring encryption means the user must have a strong lock-screen
    /// credential (PIN, password) before the entry can be created or used.
    /// The last call wins.
    #[must_use]
    pub const fn encryption_required(mut self, required: bool) -> Self {
        self.flags = if required {
            self.flags.with(EntryFlags::ENCRYPTED)
        } else {
            self.flags.without(EntryFlags::ENCRYPTED)
        };
        self
    }

    /// Sets the instant before which the key is not yet usable.
    ///
    /// By default, and with `None`, the start is unbounded.
    #[must_use]
    pub const fn validity_start(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.validity_start = start;
        self
    }

    /// Sets the instant after which the key is no longer usable, for both
    /// origination and consumption.
    ///
    /// Overwrites any prior
    /// [`validity_for_origination_end`](Self::validity_for_origination_end)
    /// and
    /// [`validity_for_consumption_end`](Self::validity_for_consumption_end)
    /// settings.
    #[must_use]
    pub const fn validity_end(self, end: Option<DateTime<Utc>>) -> Self {
        self.validity_for_origination_end(end)
            .validity_for_consumption_end(end)
    }

    /// Sets the instant after which the key is no longer usable for
    /// encryption and signing.
    ///
    /// By default, and with `None`, the end is unbounded.
    #[must_use]
    pub const fn validity_for_origination_end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.validity_for_origination_end = end;
        self
    }

    /// Sets the instant after which the key is no longer usable for
    /// decryption and verification.
    ///
    /// By default, and with `None`, the end is unbounded.
    #[must_use]
    pub const fn validity_for_consumption_end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.validity_for_consumption_end = end;
        self
    }

    /// Restricts the key to the given set of operations.
    ///
    /// Overwrites the whole set; calls are not additive. The key store's
    /// documentation treats this restriction as mandatory, but `build` does
    /// not enforce it and an empty set builds successfully.
    #[must_use]
    pub const fn purposes(mut self, purposes: PurposeSet) -> Self {
        self.purposes = purposes;
        self
    }

    /// Restricts the key to the given padding schemes.
    ///
    /// Overwrites the whole set; calls are not additive.
    #[must_use]
    pub const fn paddings(mut self, paddings: PaddingSet) -> Self {
        self.paddings = paddings;
        self
    }

    /// Restricts the key to the given digest algorithms.
    ///
    /// Marks the digest restriction as specified; there is no setter to
    /// revert to unspecified. Overwrites the whole set; calls are not
    /// additive.
    #[must_use]
    pub const fn digests(mut self, digests: DigestSet) -> Self {
        self.digests = Some(digests);
        self
    }

    /// Restricts the key to the given block modes.
    ///
    /// Overwrites the whole set; calls are not additive.
    #[must_use]
    pub const fn block_modes(mut self, block_modes: BlockModeSet) -> Self {
        self.block_modes = block_modes;
        self
    }

    /// Sets the user authenticators that protect access to the key.
    ///
    /// The key can only be used if the user has authenticated to at least
    /// one of them. An empty set (the default) means the key can be used
    /// without user authentication.
    #[must_use]
    pub const fn user_authenticators(mut self, authenticators: AuthenticatorSet) -> Self {
        self.user_authenticators = authenticators;
        self
    }

    /// Sets how long, in seconds, the key stays usable after the user
    /// authenticates to one of the associated authenticators.
    ///
    /// `-1` (the default) means unlimited reuse after a single
    /// authentication; `0` means authentication is required for every use.
    /// Any other value must be non-negative; `build` rejects the rest.
    #[must_use]
    pub const fn user_auth_validity_duration_secs(mut self, seconds: i32) -> Self {
        self.user_auth_validity_duration_secs = seconds;
        self
    }

    /// Validates the accumulated values and freezes them into a
    /// [`KeyProtection`].
    ///
    /// Either fully succeeds, returning a complete snapshot of the current
    /// field values, or fails with no observable effect on the builder.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::InvalidAuthValidityDuration`] when the
    /// user-authentication validity duration is negative and not `-1`.
    pub fn build(&self) -> ProtectionResult<KeyProtection> {
        let duration = self.user_auth_validity_duration_secs;
        if duration < 0 && duration != -1 {
            return Err(ProtectionError::InvalidAuthValidityDuration(duration));
        }

        Ok(KeyProtection {
            flags: self.flags,
            validity_start: self.validity_start,
            validity_for_origination_end: self.validity_for_origination_end,
            validity_for_consumption_end: self.validity_for_consumption_end,
            purposes: self.purposes,
            paddings: self.paddings,
            digests: self.digests,
            block_modes: self.block_modes,
            user_authenticators: self.user_authenticators,
            user_auth_validity_duration_secs: duration,
        })
    }
}
