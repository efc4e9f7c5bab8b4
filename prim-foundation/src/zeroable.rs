// PRIM - prim-foundation
// Module: Zero-fill support
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Types that have a well-defined all-zero value.
//!
//! Buffers only offer `zero()` when the element type implements
//! [`Zeroable`]. Element types without a meaningful zero (strings, boxes,
//! handles) are rejected at compile time.

/// A type with a canonical zero value that can be written in place.
pub trait Zeroable {
    /// Overwrite `self` with the zero value.
    fn zero_in_place(&mut self);

    /// Whether `self` currently holds the zero value.
    fn is_zeroed(&self) -> bool;
}

macro_rules! impl_zeroable_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zeroable for $t {
                #[inline]
                fn zero_in_place(&mut self) {
                    *self = 0;
                }

                #[inline]
                fn is_zeroed(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroable_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_zeroable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zeroable for $t {
                #[inline]
                fn zero_in_place(&mut self) {
                    *self = 0.0;
                }

                // Positive zero only: the bit pattern is what a zero fill writes.
                #[inline]
                fn is_zeroed(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )*
    };
}

impl_zeroable_float!(f32, f64);

impl Zeroable for bool {
    #[inline]
    fn zero_in_place(&mut self) {
        *self = false;
    }

    #[inline]
    fn is_zeroed(&self) -> bool {
        !*self
    }
}

impl Zeroable for char {
    #[inline]
    fn zero_in_place(&mut self) {
        *self = '\0';
    }

    #[inline]
    fn is_zeroed(&self) -> bool {
        *self == '\0'
    }
}

impl<T: Zeroable, const N: usize> Zeroable for [T; N] {
    fn zero_in_place(&mut self) {
        for item in self.iter_mut() {
            item.zero_in_place();
        }
    }

    fn is_zeroed(&self) -> bool {
        self.iter().all(Zeroable::is_zeroed)
    }
}
