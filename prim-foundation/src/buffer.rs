// PRIM - prim-foundation
// Module: BoundedBuffer - Inline-storage fixed-size array
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size, bounds-checked array with inline storage.
//!
//! `BoundedBuffer<T, N, P>` holds exactly `N` elements in a `[T; N]` and
//! routes every index through the [`BoundsPolicy`] `P`.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is an inline `[T; N]`
//! - **Never resizes**: element count and layout are fixed for the lifetime
//! - **Recursive dimensions**: a buffer of buffers is a multi-dimensional
//!   buffer with row-major layout identical to `[[T; C]; R]`
//! - **Non-empty**: `N == 0` is rejected at compile time

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use prim_error::{Error, Result};

use crate::policy::{BoundsPolicy, Strict};
use crate::zeroable::Zeroable;

/// A fixed-size array of `N` elements with policy-checked indexing.
///
/// # Invariants
///
/// 1. `N > 0`
/// 2. The buffer owns exactly `N` initialized elements
/// 3. Every index handed to the storage is `< N`
///
/// # Examples
///
/// ```
/// use prim_foundation::buffer::{BoundedBuffer, Buffer2};
///
/// let mut grid = Buffer2::<i32, 2, 3>::new();
/// grid[0][1] = 7;
/// assert_eq!(grid[0][1], 7);
///
/// grid.zero();
/// assert_eq!(grid[1][2], 0);
///
/// let row = BoundedBuffer::<u8, 4>::from_array([1, 2, 3, 4]);
/// assert_eq!(*row.get(3)?, 4);
/// assert!(row.get(4).is_err());
/// # Ok::<(), prim_foundation::Error>(())
/// ```
#[repr(transparent)]
pub struct BoundedBuffer<T, const N: usize, P = Strict> {
    /// Inline element storage
    data: [T; N],

    /// Policy marker; `fn() -> P` keeps auto traits tied to `T` only
    _policy: PhantomData<fn() -> P>,
}

/// Two-dimensional buffer with `R` rows of `C` columns.
pub type Buffer2<T, const R: usize, const C: usize, P = Strict> =
    BoundedBuffer<BoundedBuffer<T, C, P>, R, P>;

/// Three-dimensional buffer, `D0 x D1 x D2`.
pub type Buffer3<T, const D0: usize, const D1: usize, const D2: usize, P = Strict> =
    BoundedBuffer<BoundedBuffer<BoundedBuffer<T, D2, P>, D1, P>, D0, P>;

impl<T, const N: usize, P> BoundedBuffer<T, N, P> {
    /// Number of elements in the outermost dimension.
    pub const LEN: usize = N;

    const NON_EMPTY: () = assert!(N > 0, "BoundedBuffer dimensions must be greater than zero");

    /// Wrap an existing array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data,
            _policy: PhantomData,
        }
    }

    /// Number of elements in the outermost dimension.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`: a buffer has at least one element.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checked shared access. Fails regardless of the policy.
    ///
    /// # Errors
    ///
    /// Returns a `Bounds` error when `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(Error::index_out_of_range("Buffer index out of range"))
    }

    /// Checked exclusive access. Fails regardless of the policy.
    ///
    /// # Errors
    ///
    /// Returns a `Bounds` error when `index >= N`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(Error::index_out_of_range("Buffer index out of range"))
    }

    /// Element 0.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &T {
        let () = Self::NON_EMPTY;
        &self.data[0]
    }

    /// Element 0, mutably.
    #[inline]
    pub fn first_mut(&mut self) -> &mut T {
        let () = Self::NON_EMPTY;
        &mut self.data[0]
    }

    /// Raw pointer to element 0.
    ///
    /// For nested buffers the pointee layout is the flat row-major array.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable raw pointer to element 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// The outermost dimension as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the outermost dimension.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow the underlying array.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Consume the buffer, returning the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Checked offset view: elements `n..N`.
    ///
    /// # Errors
    ///
    /// Returns a `Bounds` error when `n >= N`.
    #[inline]
    pub fn checked_offset(&self, n: usize) -> Result<&[T]> {
        if n < N {
            Ok(&self.data[n..])
        } else {
            Err(Error::offset_out_of_range("Buffer offset past last element"))
        }
    }

    /// Iterate the outermost dimension.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate the outermost dimension mutably.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Overwrite every element of the outermost dimension with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Reinterpret the buffer under another bounds policy.
    #[inline]
    pub fn into_policy<Q>(self) -> BoundedBuffer<T, N, Q> {
        BoundedBuffer::from_array(self.data)
    }
}

impl<T: Default, const N: usize, P> BoundedBuffer<T, N, P> {
    /// Create a buffer of `N` default elements.
    #[must_use]
    pub fn new() -> Self {
        Self::from_array(core::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize, P: BoundsPolicy> BoundedBuffer<T, N, P> {
    /// Policy-checked shared access, identical to `self[index]`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        &self.data[P::resolve(index, N)]
    }

    /// Policy-checked exclusive access, identical to `&mut self[index]`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[P::resolve(index, N)]
    }

    /// Elements starting `n` past the first, under the buffer's policy.
    #[inline]
    #[track_caller]
    pub fn offset(&self, n: usize) -> &[T] {
        &self.data[P::resolve(n, N)..]
    }

    /// Mutable counterpart of [`offset`](Self::offset).
    #[inline]
    #[track_caller]
    pub fn offset_mut(&mut self, n: usize) -> &mut [T] {
        &mut self.data[P::resolve(n, N)..]
    }

    /// Raw pointer `n` elements past the first, under the buffer's policy.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn offset_ptr(&self, n: usize) -> *const T {
        self.offset(n).as_ptr()
    }
}

impl<T: Zeroable, const N: usize, P> BoundedBuffer<T, N, P> {
    /// Overwrite every element, at every level of nesting, with zero.
    pub fn zero(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::BufferTrace::zeroing(N, core::mem::size_of::<Self>()).entered();

        self.data.zero_in_place();
    }
}

impl<T: Zeroable, const N: usize, P> Zeroable for BoundedBuffer<T, N, P> {
    fn zero_in_place(&mut self) {
        self.data.zero_in_place();
    }

    fn is_zeroed(&self) -> bool {
        self.data.is_zeroed()
    }
}

impl<T, const N: usize, P: BoundsPolicy> Index<usize> for BoundedBuffer<T, N, P> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T, const N: usize, P: BoundsPolicy> IndexMut<usize> for BoundedBuffer<T, N, P> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: Default, const N: usize, P> Default for BoundedBuffer<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, P> Clone for BoundedBuffer<T, N, P> {
    fn clone(&self) -> Self {
        Self::from_array(self.data.clone())
    }
}

impl<T: Copy, const N: usize, P> Copy for BoundedBuffer<T, N, P> {}

impl<T: PartialEq, const N: usize, P> PartialEq for BoundedBuffer<T, N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize, P> Eq for BoundedBuffer<T, N, P> {}

impl<T: Hash, const N: usize, P> Hash for BoundedBuffer<T, N, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: fmt::Debug, const N: usize, P> fmt::Debug for BoundedBuffer<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, const N: usize, P> From<[T; N]> for BoundedBuffer<T, N, P> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize, P> AsRef<[T]> for BoundedBuffer<T, N, P> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize, P> AsMut<[T]> for BoundedBuffer<T, N, P> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T, const N: usize, P> IntoIterator for &'a BoundedBuffer<T, N, P> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize, P> IntoIterator for &'a mut BoundedBuffer<T, N, P> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const N: usize, P> IntoIterator for BoundedBuffer<T, N, P> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(kani)]
mod verification {
    use super::*;
    use crate::policy::Clamp;

    #[kani::proof]
    fn verify_clamp_stays_in_bounds() {
        let buffer = BoundedBuffer::<u8, 4, Clamp>::from_array([1, 2, 3, 4]);
        let index: usize = kani::any();

        let value = buffer[index];
        if index < 4 {
            assert!(value == buffer.as_array()[index]);
        } else {
            assert!(value == 4);
        }
    }

    #[kani::proof]
    fn verify_checked_get_matches_range() {
        let buffer = BoundedBuffer::<u16, 3>::new();
        let index: usize = kani::any();

        assert!(buffer.get(index).is_ok() == (index < 3));
    }

    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_zero_clears_nested() {
        let mut grid = Buffer2::<u32, 2, 3>::from_array([
            BoundedBuffer::from_array([kani::any(), kani::any(), kani::any()]),
            BoundedBuffer::from_array([kani::any(), kani::any(), kani::any()]),
        ]);
        grid.zero();
        assert!(grid.is_zeroed());
    }
}
