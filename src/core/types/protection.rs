//! `KeyProtection`: immutable key-usage and storage-protection parameters.

use chrono::{DateTime, Utc};

use crate::core::constraint::{AuthenticatorSet, BlockModeSet, DigestSet, PaddingSet, PurposeSet};
use crate::core::error::{ProtectionError, ProtectionResult};
use crate::core::flags::EntryFlags;

/// Immutable description of how a key-store entry may be used and stored.
///
/// Values are produced only by
/// [`KeyProtectionBuilder::build`](crate::core::types::KeyProtectionBuilder::build)
/// and cannot be modified afterwards, so they are safe for unsynchronized
/// concurrent reads. The external provisioning subsystem enforces the
/// constraints described here at key-generation and key-use time; this type
/// only carries them.
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
///     .build()
///     .expect("parameters are valid");
///
/// assert!(protection.is_encryption_required());
/// assert!(!protection.is_digests_specified());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyProtection {
    pub(crate) flags: EntryFlags,
    pub(crate) validity_start: Option<DateTime<Utc>>,
    pub(crate) validity_for_origination_end: Option<DateTime<Utc>>,
    pub(crate) validity_for_consumption_end: Option<DateTime<Utc>>,
    pub(crate) purposes: PurposeSet,
    pub(crate) paddings: PaddingSet,
    pub(crate) digests: Option<DigestSet>,
    pub(crate) block_modes: BlockModeSet,
    pub(crate) user_authenticators: AuthenticatorSet,
    pub(crate) user_auth_validity_duration_secs: i32,
}

impl KeyProtection {
    /// Returns the raw storage-protection flag word handed to the key store.
    #[must_use]
    pub const fn flags(&self) -> EntryFlags {
        self.flags
    }

    /// Returns `true` if the entry must be encrypted at rest.
    #[must_use]
    pub const fn is_encryption_required(&self) -> bool {
        self.flags.contains(EntryFlags::ENCRYPTED)
    }

    /// Instant before which the key is not yet usable, or `None` if
    /// unbounded.
    #[must_use]
    pub const fn validity_start(&self) -> Option<DateTime<Utc>> {
        self.validity_start
    }

    /// Instant after which the key is no longer usable for encryption and
    /// signing, or `None` if unbounded.
    #[must_use]
    pub const fn validity_for_origination_end(&self) -> Option<DateTime<Utc>> {
        self.validity_for_origination_end
    }

    /// Instant after which the key is no longer usable for decryption and
    /// verification, or `None` if unbounded.
    #[must_use]
    pub const fn validity_for_consumption_end(&self) -> Option<DateTime<Utc>> {
        self.validity_for_consumption_end
    }

    /// Operations the key may be used for. Empty asserts no restriction.
    #[must_use]
    pub const fn purposes(&self) -> PurposeSet {
        self.purposes
    }

    /// Padding schemes the key is restricted to. Empty asserts no
    /// restriction.
    #[must_use]
    pub const fn paddings(&self) -> PaddingSet {
        self.paddings
    }

    /// Digest algorithms the key is restricted to.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::DigestsNotSpecified`] if the parameters
    /// were built without a digest restriction. Check
    /// [`is_digests_specified`](Self::is_digests_specified) first, or handle
    /// the failure.
    pub fn digests(&self) -> ProtectionResult<DigestSet> {
        self.digests.ok_or(ProtectionError::DigestsNotSpecified)
    }

    /// Returns `true` if a digest restriction has been specified.
    ///
    /// An unspecified restriction is distinct from one specified as the
    /// empty set.
    #[must_use]
    pub const fn is_digests_specified(&self) -> bool {
        self.digests.is_some()
    }

    /// Block modes the key is restricted to. Empty asserts no restriction.
    #[must_use]
    pub const fn block_modes(&self) -> BlockModeSet {
        self.block_modes
    }

    /// User authenticators protecting access to the key. Empty means the key
    /// can be used without user authentication.
    #[must_use]
    pub const fn user_authenticators(&self) -> AuthenticatorSet {
        self.user_authenticators
    }

    /// Seconds for which the key stays usable after the user authenticates
    /// to one of the associated authenticators.
    ///
    /// `-1` means unlimited reuse after a single authentication; `0` means
    /// authentication is required for every use.
    #[must_use]
    pub const fn user_auth_validity_duration_secs(&self) -> i32 {
        self.user_auth_validity_duration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::UnlockContext;
    use crate::core::types::KeyProtectionBuilder;
    use chrono::TimeZone;

    fn builder() -> KeyProtectionBuilder {
        KeyProtectionBuilder::new(Some(&UnlockContext::new())).expect("context is present")
    }

    #[test]
    fn test_defaults() -> ProtectionResult<()> {
        let protection = builder().build()?;

        assert_eq!(protection.flags(), EntryFlags::NONE);
        assert!(!protection.is_encryption_required());
        assert_eq!(protection.validity_start(), None);
        assert_eq!(protection.validity_for_origination_end(), None);
        assert_eq!(protection.validity_for_consumption_end(), None);
        assert!(protection.purposes().is_empty());
        assert!(protection.paddings().is_empty());
        assert!(!protection.is_digests_specified());
        assert!(protection.block_modes().is_empty());
        assert!(protection.user_authenticators().is_empty());
        assert_eq!(protection.user_auth_validity_duration_secs(), -1);
        Ok(())
    }

    #[test]
    fn test_digests_unspecified_fails() -> ProtectionResult<()> {
        let protection = builder().build()?;
        let result = protection.digests();
        assert!(matches!(result, Err(ProtectionError::DigestsNotSpecified)));
        Ok(())
    }

    #[test]
    fn test_digests_specified_as_empty_is_still_specified() -> ProtectionResult<()> {
        let protection = builder().digests(DigestSet::NONE).build()?;
        assert!(protection.is_digests_specified());
        assert_eq!(protection.digests()?, DigestSet::NONE);
        Ok(())
    }

    #[test]
    fn test_accessors_return_stored_values() -> ProtectionResult<()> {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();

        let protection = builder()
            .encryption_required(true)
            .validity_start(Some(start))
            .validity_for_origination_end(Some(end))
            .purposes(PurposeSet::from_bits(0b11))
            .paddings(PaddingSet::from_bits(0b1))
            .digests(DigestSet::from_bits(0b100))
            .block_modes(BlockModeSet::from_bits(0b10))
            .user_authenticators(AuthenticatorSet::from_bits(0b1))
            .user_auth_validity_duration_secs(300)
            .build()?;

        assert!(protection.is_encryption_required());
        assert_eq!(protection.validity_start(), Some(start));
        assert_eq!(protection.validity_for_origination_end(), Some(end));
        assert_eq!(protection.validity_for_consumption_end(), None);
        assert_eq!(protection.purposes(), PurposeSet::from_bits(0b11));
        assert_eq!(protection.paddings(), PaddingSet::from_bits(0b1));
        assert_eq!(protection.digests()?, DigestSet::from_bits(0b100));
        assert_eq!(protection.block_modes(), BlockModeSet::from_bits(0b10));
        assert_eq!(
            protection.user_authenticators(),
            AuthenticatorSet::from_bits(0b1)
        );
        assert_eq!(protection.user_auth_validity_duration_secs(), 300);
        Ok(())
    }

    #[test]
    fn test_copies_are_independent_and_equal() -> ProtectionResult<()> {
        let protection = builder().encryption_required(true).build()?;
        let copy = protection;
        assert_eq!(protection, copy);
        Ok(())
    }
}
