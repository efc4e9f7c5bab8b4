// Copyright (c) 2024 Ralf Anton Beier
// SPDX-License-Identifier: MIT
// Project: PRIM
// Module: prim-math::bitops

//! Bit manipulation over any [`Word`].
//!
//! Bit positions are `u32` and count from the least significant bit. Setting
//! or clearing a position at or beyond the word width is a caller bug and
//! panics; the query operations report it through `Result` or `Option`
//! instead.
//!
//! ```
//! use prim_math::bitops;
//!
//! let mut flags = 0u16;
//! bitops::set(2, &mut flags);
//! bitops::set(4, &mut flags);
//! assert_eq!(flags, 0b10100);
//! assert_eq!(bitops::count(flags), 2);
//! assert_eq!(bitops::lsb(flags), Some(2));
//! assert_eq!(bitops::msb(flags), Some(4));
//! assert!(bitops::get_bit::<u8>(8).is_err());
//! ```

use core::iter::FusedIterator;

use prim_error::{Error, Result};

use crate::word::Word;

#[inline]
#[track_caller]
fn single_bit<T: Word>(bit: u32) -> T {
    assert!(
        bit < T::BITS,
        "bit index {bit} out of range for a {}-bit word",
        T::BITS
    );
    T::ONE << bit
}

/// Number of set bits, counted by repeatedly clearing the lowest one.
#[must_use]
pub fn count<T: Word>(mut word: T) -> u32 {
    let mut n = 0;
    while word != T::ZERO {
        word &= word.wrapping_dec();
        n += 1;
    }
    n
}

/// Set `bit` in `word`.
///
/// # Panics
///
/// Panics if `bit >= T::BITS`.
#[inline]
#[track_caller]
pub fn set<T: Word>(bit: u32, word: &mut T) {
    *word |= single_bit::<T>(bit);
}

/// Clear `bit` in `word`.
///
/// # Panics
///
/// Panics if `bit >= T::BITS`.
#[inline]
#[track_caller]
pub fn clear<T: Word>(bit: u32, word: &mut T) {
    *word &= !single_bit::<T>(bit);
}

/// Clear every bit of `word` that is set in `mask`.
#[inline]
pub fn clear_bits<T: Word>(mask: T, word: &mut T) {
    *word &= !mask;
}

/// Whether `bit` is set in `word`. Positions beyond the width are never set.
#[inline]
#[must_use]
pub fn is_set<T: Word>(bit: u32, word: T) -> bool {
    T::checked_bit(bit).is_some_and(|m| word & m != T::ZERO)
}

/// A word with only `bit` set.
///
/// # Errors
///
/// Returns a `Bounds` error when `bit >= T::BITS`.
#[inline]
pub fn get_bit<T: Word>(bit: u32) -> Result<T> {
    T::checked_bit(bit).ok_or(Error::bit_out_of_range("Bit index exceeds word width"))
}

/// Index of the least significant set bit, scanning upward from bit 0.
///
/// Portable and O(width); see [`lsb_fast`] for the intrinsic version.
#[must_use]
pub fn lsb<T: Word>(word: T) -> Option<u32> {
    (0..T::BITS).find(|&bit| word & (T::ONE << bit) != T::ZERO)
}

/// Index of the most significant set bit, scanning downward from the top.
#[must_use]
pub fn msb<T: Word>(word: T) -> Option<u32> {
    (0..T::BITS).rev().find(|&bit| word & (T::ONE << bit) != T::ZERO)
}

/// [`lsb`] using the hardware trailing-zero count.
#[inline]
#[must_use]
pub fn lsb_fast<T: Word>(word: T) -> Option<u32> {
    (word != T::ZERO).then(|| word.trailing_zeros())
}

/// [`msb`] using the hardware leading-zero count.
#[inline]
#[must_use]
pub fn msb_fast<T: Word>(word: T) -> Option<u32> {
    (word != T::ZERO).then(|| T::BITS - 1 - word.leading_zeros())
}

/// Iterator over the set bit indices of a word, in ascending order.
///
/// Created by [`ones`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ones<T: Word> {
    remaining: T,
}

impl<T: Word> Iterator for Ones<T> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.remaining == T::ZERO {
            return None;
        }
        let bit = self.remaining.trailing_zeros();
        self.remaining &= self.remaining.wrapping_dec();
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl<T: Word> DoubleEndedIterator for Ones<T> {
    fn next_back(&mut self) -> Option<u32> {
        let bit = msb_fast(self.remaining)?;
        self.remaining &= !(T::ONE << bit);
        Some(bit)
    }
}

impl<T: Word> ExactSizeIterator for Ones<T> {}

impl<T: Word> FusedIterator for Ones<T> {}

/// Lazily yield the indices of the set bits of `word`, lowest first.
#[inline]
#[must_use]
pub fn ones<T: Word>(word: T) -> Ones<T> {
    Ones { remaining: word }
}

/// Indices of the set bits of `word`, lowest first.
#[cfg(feature = "alloc")]
#[must_use]
pub fn get_1bits<T: Word>(word: T) -> alloc::vec::Vec<u32> {
    ones(word).collect()
}

/// Write the set bit indices of `word` into `out`, lowest first, and return
/// how many were written.
///
/// # Errors
///
/// Returns a `Capacity` error, leaving `out` untouched, when `out` is shorter
/// than the number of set bits.
pub fn get_1bits_into<T: Word>(word: T, out: &mut [u32]) -> Result<usize> {
    let n = count(word) as usize;
    if n > out.len() {
        return Err(Error::output_too_small(
            "Output slice shorter than number of set bits",
        ));
    }
    for (slot, bit) in out.iter_mut().zip(ones(word)) {
        *slot = bit;
    }
    Ok(n)
}

/// OR together `1 << i` for every index. An empty input yields zero.
///
/// # Panics
///
/// Panics if any index is `>= T::BITS`.
#[track_caller]
pub fn build_word<T: Word, I: IntoIterator<Item = u32>>(indices: I) -> T {
    let mut word = T::ZERO;
    for bit in indices {
        set(bit, &mut word);
    }
    word
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_scans_agree_u8() {
        let word: u8 = kani::any();
        assert!(lsb(word) == lsb_fast(word));
        assert!(msb(word) == msb_fast(word));
    }

    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_count_matches_popcount() {
        let word: u8 = kani::any();
        assert!(count(word) == word.count_ones());
    }

    #[kani::proof]
    fn verify_get_bit_domain() {
        let bit: u32 = kani::any();
        assert!(get_bit::<u32>(bit).is_ok() == (bit < 32));
    }
}
