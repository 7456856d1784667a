// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Const-constructible references to memory mapped register blocks.

use core::fmt;
use core::ops::Deref;
use core::ptr::NonNull;

/// A `&'static T` to a register block whose address is only known as an
/// integer, such as `0x4401_0000` for I2C0.
///
/// The dereference is deferred until use, so a `StaticRef` can live in a
/// `const` even though the address has no allocation at compile time.
pub struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Wrap a raw peripheral address.
    ///
    /// ## Safety
    ///
    /// - `ptr` must be non-null, aligned for `T` and dereferenceable as `T`.
    /// - The memory behind `ptr` must stay valid for the whole program.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        // SAFETY: the caller guarantees `ptr` is non-null.
        StaticRef {
            ptr: unsafe { NonNull::new_unchecked(ptr.cast_mut()) },
        }
    }

    /// Numeric address of the register block. Does not dereference.
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: `new` required the pointer to be valid for the program
        // duration.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> fmt::Debug for StaticRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticRef({:#010x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::StaticRef;

    #[repr(C)]
    struct Block {
        _word: u32,
    }

    const BLOCK: StaticRef<Block> = unsafe { StaticRef::new(0x4401_0000 as *const Block) };

    #[test]
    fn address_is_kept_without_dereference() {
        let copy = BLOCK;
        assert_eq!(BLOCK.addr(), 0x4401_0000);
        assert_eq!(copy.as_ptr() as usize, 0x4401_0000);
    }

    #[test]
    fn debug_prints_the_address() {
        assert_eq!(format!("{:?}", BLOCK), "StaticRef(0x44010000)");
    }
}
