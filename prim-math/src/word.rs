// Copyright (c) 2024 Ralf Anton Beier
// SPDX-License-Identifier: MIT
// Project: PRIM
// Module: prim-math::word

//! The [`Word`] abstraction over fixed-width unsigned integers.

use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr,
};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer interpreted as a set of bit flags indexed from the
/// least significant bit.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Binary
    + Send
    + Sync
    + 'static
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the word in bits
    const BITS: u32;
    /// All bits clear
    const ZERO: Self;
    /// Only bit 0 set
    const ONE: Self;
    /// All bits set
    const MAX: Self;

    /// `1 << bit`, or `None` when `bit >= BITS`
    fn checked_bit(bit: u32) -> Option<Self>;

    /// `self - 1` with wraparound
    fn wrapping_dec(self) -> Self;

    /// Hardware trailing-zero count
    fn trailing_zeros(self) -> u32;

    /// Hardware leading-zero count
    fn leading_zeros(self) -> u32;

    /// Hardware population count
    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn checked_bit(bit: u32) -> Option<Self> {
                    <$t>::checked_shl(1, bit)
                }

                #[inline]
                fn wrapping_dec(self) -> Self {
                    <$t>::wrapping_sub(self, 1)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
