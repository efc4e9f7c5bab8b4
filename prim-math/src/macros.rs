// Copyright (c) 2024 Ralf Anton Beier
// SPDX-License-Identifier: MIT
// Project: PRIM
// Module: prim-math::macros

/// Build a bit mask from a list of bit positions, usable in `const` context.
///
/// A position outside the word width is a compile error when evaluated in
/// `const` context and a panic otherwise.
///
/// ```
/// use prim_math::mask;
///
/// const CASTLING: u64 = mask!(u64; 0, 7, 56, 63);
/// assert_eq!(CASTLING.count_ones(), 4);
/// assert_eq!(mask!(u8; 1, 3), 0b1010);
/// assert_eq!(mask!(u32;), 0);
/// ```
#[macro_export]
macro_rules! mask {
    ($t:ty; $($bit:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut mask: $t = 0;
        $(
            mask |= (1 as $t) << ($bit);
        )*
        mask
    }};
}
