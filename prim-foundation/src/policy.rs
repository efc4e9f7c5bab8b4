// PRIM - prim-foundation
// Module: Bounds policies for fixed-size buffers
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Out-of-range handling for [`BoundedBuffer`](crate::buffer::BoundedBuffer).
//!
//! A policy is a zero-sized type chosen per buffer type. It maps a requested
//! index onto an index that is guaranteed to be `< len`, or refuses to.
//!
//! | Policy     | Out-of-range index                                  |
//! |------------|-----------------------------------------------------|
//! | [`Strict`] | panics naming the index and the length               |
//! | [`Clamp`]  | emits a `warn` event and continues with `len - 1`    |

use core::fmt::Debug;
use core::panic::Location;

/// Selects what happens when a buffer is indexed out of range.
///
/// Implementations must return a value strictly below `len` or diverge.
/// `len` is never zero.
pub trait BoundsPolicy: Copy + Debug + Default + Send + Sync + 'static {
    /// Human readable policy name, used in diagnostics
    const NAME: &'static str;

    /// Map `index` into `0..len`.
    #[track_caller]
    fn resolve(index: usize, len: usize) -> usize;
}

/// Fail-fast policy. The default for every buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Strict;

impl BoundsPolicy for Strict {
    const NAME: &'static str = "strict";

    /// # Panics
    ///
    /// Panics when `index >= len`, naming both values.
    #[inline]
    #[track_caller]
    #[allow(clippy::panic)]
    fn resolve(index: usize, len: usize) -> usize {
        if index < len {
            index
        } else {
            panic!("buffer index out of range: the len is {len} but the index is {index}")
        }
    }
}

/// Diagnose-and-continue policy.
///
/// Reports the caller location and clamps to the last valid slot, so no
/// access ever leaves the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Clamp;

impl BoundsPolicy for Clamp {
    const NAME: &'static str = "clamp";

    #[inline]
    #[track_caller]
    fn resolve(index: usize, len: usize) -> usize {
        if index < len {
            return index;
        }

        let location = Location::caller();
        report_clamped(index, len, location);
        len.saturating_sub(1)
    }
}

#[cfg(feature = "tracing")]
#[cold]
fn report_clamped(index: usize, len: usize, location: &'static Location<'static>) {
    crate::tracing::warn!(
        index,
        len,
        location = %location,
        "buffer index out of range, clamping to last element"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn report_clamped(_index: usize, _len: usize, _location: &'static Location<'static>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_in_range() {
        assert_eq!(Strict::resolve(0, 4), 0);
        assert_eq!(Strict::resolve(3, 4), 3);
    }

    #[test]
    #[should_panic(expected = "the len is 4 but the index is 4")]
    fn test_strict_out_of_range_panics() {
        let _ = Strict::resolve(4, 4);
    }

    #[test]
    fn test_clamp_maps_to_last_slot() {
        assert_eq!(Clamp::resolve(2, 4), 2);
        assert_eq!(Clamp::resolve(4, 4), 3);
        assert_eq!(Clamp::resolve(usize::MAX, 1), 0);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Strict::NAME, "strict");
        assert_eq!(Clamp::NAME, "clamp");
    }
}
