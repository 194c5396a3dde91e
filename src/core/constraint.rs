//! Typed constraint sets over externally-owned bit encodings.
//!
//! The key store's constraints module owns the concrete bit assignments for
//! purposes, paddings, digests, block modes, and user authenticators. This
//! module wraps those opaque `u32` encodings in typed sets so that, for
//! example, a purpose mask cannot be handed to a setter expecting a padding
//! mask. [`ConstraintSet::from_bits`] and [`ConstraintSet::bits`] convert
//! to and from the external encoding at the boundary; nothing in between
//! assumes specific bit positions. The empty set (`0`) asserts no
//! restriction.

use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, BitOrAssign};

mod private {
    pub trait Sealed {}
}

/// Trait for constraint-family markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
/// Each marker names one family of key-usage constraints whose bit
/// assignments are owned by the external constraints module.
pub trait ConstraintKind: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// Family name used in `Debug` and `Display` output.
    const NAME: &'static str;
}

/// Marker for allowed cryptographic operations (encrypt, sign, ...).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Purpose;

impl private::Sealed for Purpose {}

impl ConstraintKind for Purpose {
    const NAME: &'static str = "purpose";
}

/// Marker for allowed padding schemes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding;

impl private::Sealed for Padding {}

impl ConstraintKind for Padding {
    const NAME: &'static str = "padding";
}

/// Marker for allowed digest algorithms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest;

impl private::Sealed for Digest {}

impl ConstraintKind for Digest {
    const NAME: &'static str = "digest";
}

/// Marker for allowed block modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMode;

impl private::Sealed for BlockMode {}

impl ConstraintKind for BlockMode {
    const NAME: &'static str = "block-mode";
}

/// Marker for user authenticators that can unlock use of a key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Authenticator;

impl private::Sealed for Authenticator {}

impl ConstraintKind for Authenticator {
    const NAME: &'static str = "authenticator";
}

/// A set of constraint flags drawn from one externally-encoded family.
///
/// The set is a thin typed wrapper over the family's integer bit encoding.
/// An empty set asserts no restriction for that family.
///
/// # Example
///
/// ```rust
/// use keyprotect::core::constraint::PurposeSet;
///
/// // Bit values come from the key store's constraints module.
/// const ENCRYPT: u32 = 1 << 0;
/// const SIGN: u32 = 1 << 2;
///
/// let purposes = PurposeSet::from_bits(ENCRYPT) | PurposeSet::from_bits(SIGN);
/// assert!(purposes.contains(PurposeSet::from_bits(SIGN)));
/// assert_eq!(purposes.bits(), ENCRYPT | SIGN);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintSet<C: ConstraintKind> {
    bits: u32,
    _kind: PhantomData<C>,
}

impl<C: ConstraintKind> ConstraintSet<C> {
    /// The empty set: no restriction asserted.
    pub const NONE: Self = Self {
        bits: 0,
        _kind: PhantomData,
    };

    /// Creates the empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Wraps an externally-encoded bit mask.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            bits,
            _kind: PhantomData,
        }
    }

    /// Returns the external integer encoding of this set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` if no restriction is asserted.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every flag in `other` is also present in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns `true` if the two sets share at least one flag.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }
}

impl<C: ConstraintKind> BitOr for ConstraintSet<C> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<C: ConstraintKind> BitOrAssign for ConstraintSet<C> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl<C: ConstraintKind> BitAnd for ConstraintSet<C> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl<C: ConstraintKind> Debug for ConstraintSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("family", &C::NAME)
            .field("bits", &format_args!("{:#x}", self.bits))
            .finish()
    }
}

impl<C: ConstraintKind> Display for ConstraintSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", C::NAME, self.bits)
    }
}

// =============================================================================
// Per-family aliases
// =============================================================================

/// Allowed cryptographic operations for a key.
pub type PurposeSet = ConstraintSet<Purpose>;

/// Allowed padding schemes for a key.
pub type PaddingSet = ConstraintSet<Padding>;

/// Allowed digest algorithms for a key.
pub type DigestSet = ConstraintSet<Digest>;

/// Allowed block modes for a key.
pub type BlockModeSet = ConstraintSet<BlockMode>;

/// User authenticators that can unlock use of a key.
pub type AuthenticatorSet = ConstraintSet<Authenticator>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names() {
        assert_eq!(Purpose::NAME, "purpose");
        assert_eq!(Padding::NAME, "padding");
        assert_eq!(Digest::NAME, "digest");
        assert_eq!(BlockMode::NAME, "block-mode");
        assert_eq!(Authenticator::NAME, "authenticator");
    }

    #[test]
    fn test_bits_roundtrip() {
        let set = PurposeSet::from_bits(0b1011);
        assert_eq!(set.bits(), 0b1011);
    }

    #[test]
    fn test_none_is_empty() {
        assert!(PurposeSet::NONE.is_empty());
        assert!(DigestSet::none().is_empty());
        assert_eq!(AuthenticatorSet::default(), AuthenticatorSet::NONE);
        assert!(!PaddingSet::from_bits(0b1).is_empty());
    }

    #[test]
    fn test_contains() {
        let set = BlockModeSet::from_bits(0b110);
        assert!(set.contains(BlockModeSet::from_bits(0b100)));
        assert!(set.contains(BlockModeSet::from_bits(0b110)));
        assert!(set.contains(BlockModeSet::NONE));
        assert!(!set.contains(BlockModeSet::from_bits(0b001)));
        assert!(!set.contains(BlockModeSet::from_bits(0b101)));
    }

    #[test]
    fn test_intersects() {
        let set = PaddingSet::from_bits(0b110);
        assert!(set.intersects(PaddingSet::from_bits(0b010)));
        assert!(!set.intersects(PaddingSet::from_bits(0b001)));
        assert!(!set.intersects(PaddingSet::NONE));
    }

    #[test]
    fn test_union_and_operators() {
        let a = PurposeSet::from_bits(0b01);
        let b = PurposeSet::from_bits(0b10);
        assert_eq!(a.union(b).bits(), 0b11);
        assert_eq!((a | b).bits(), 0b11);

        let mut acc = PurposeSet::NONE;
        acc |= a;
        acc |= b;
        assert_eq!(acc.bits(), 0b11);

        assert_eq!((acc & a).bits(), 0b01);
    }

    #[test]
    fn test_display() {
        assert_eq!(PurposeSet::from_bits(0x3).to_string(), "purpose(0x3)");
        assert_eq!(DigestSet::NONE.to_string(), "digest(0x0)");
    }

    #[test]
    fn test_debug_shows_family() {
        let debug_str = format!("{:?}", AuthenticatorSet::from_bits(0x2));
        assert!(debug_str.contains("authenticator"));
        assert!(debug_str.contains("0x2"));
    }
}
