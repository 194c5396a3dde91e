//! Storage-protection flags for a key-store entry.

use core::fmt::{self, Debug};

/// Flag word describing how the key store must protect an entry at rest.
///
/// The flag word travels to the provisioning subsystem as a plain integer;
/// [`EntryFlags::from_bits`] and [`EntryFlags::bits`] convert at that
/// boundary. The only bit this crate interprets is [`EntryFlags::ENCRYPTED`].
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryFlags(u32);

impl EntryFlags {
    /// No storage-protection flags.
    pub const NONE: Self = Self(0);

    /// The entry must be encrypted at rest. Requires the user to have a
    /// strong lock-screen credential before the entry can be created or used.
    pub const ENCRYPTED: Self = Self(1);

    /// Wraps a raw flag word.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw flag word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the flags with every flag in `other` set.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the flags with every flag in `other` cleared.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl Debug for EntryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryFlags")
            .field(&format_args!("{:#x}", self.0))
            .finish()
    }
}
