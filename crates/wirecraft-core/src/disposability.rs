//! Disposal capabilities carried by type descriptors.

use bitflags::bitflags;

bitflags! {
    /// Disposal interfaces a type implements.
    ///
    /// Supplied by the front end alongside the type's identity. A type can be
    /// both synchronously and asynchronously disposable.
    ///
    /// ```rust
    /// use wirecraft_core::Disposability;
    ///
    /// let both = Disposability::SYNC | Disposability::ASYNC;
    /// assert!(both.is_sync());
    /// assert!(both.is_async());
    /// assert!(!Disposability::empty().is_disposable());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Disposability: u8 {
        /// Implements synchronous disposal.
        const SYNC = 0b01;
        /// Implements asynchronous disposal.
        const ASYNC = 0b10;
    }
}

impl Disposability {
    /// Whether any disposal interface is implemented.
    #[inline]
    pub fn is_disposable(self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub fn is_sync(self) -> bool {
        self.contains(Self::SYNC)
    }

    #[inline]
    pub fn is_async(self) -> bool {
        self.contains(Self::ASYNC)
    }
}
