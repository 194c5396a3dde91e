//! Platform unlock context.

/// Opaque handle to the platform's unlock and authorization facility.
///
/// [`KeyProtectionBuilder::new`](crate::core::types::KeyProtectionBuilder::new)
/// requires one to be present. The handle currently carries no behavior; it
/// is reserved so a future revision can ask the platform to prompt the user
/// to unlock or initialize the key store without changing the builder's
/// signature. It is checked for presence and not retained.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnlockContext(());

impl UnlockContext {
    /// Creates a new unlock context handle.
    #[must_use]
    pub const fn new() -> Self {
        Self(())
    }
}
