// Copyright (c) 2024 Ralf Anton Beier
// SPDX-License-Identifier: MIT
// Project: PRIM
// Module: prim-math

//! Bit manipulation primitives for PRIM.
//! Treats fixed-width unsigned integers as sets of bit flags.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

// Import alloc for Vec-returning helpers
#[cfg(feature = "alloc")]
extern crate alloc;

// Modules
#[macro_use]
mod macros;
pub mod bitops;
pub mod prelude;
pub mod word;

pub use bitops::{
    build_word, clear, clear_bits, count, get_1bits_into, get_bit, is_set, lsb, lsb_fast, msb,
    msb_fast, ones, set, Ones,
};
#[cfg(feature = "alloc")]
pub use bitops::get_1bits;
pub use word::Word;
// Re-export error type from prim-error for convenience
pub use prim_error::Error as PrimMathError;
pub use prim_error::Result as PrimMathResult;
