//! PRIM: small, strongly typed utility primitives.
//!
//! This facade re-exports the PRIM crates:
//!
//! - [`buffer`]: `BoundedBuffer`, the bounds-checked fixed-size (and nested
//!   multi-dimensional) array, with its [`policy`] types
//! - [`bitops`]: counting, setting, clearing and scanning bits of unsigned
//!   words, plus the [`mask!`] macro
//! - [`type_traits`]: compile-time type predicates
//! - [`text`]: `SuperString` and text/number conversion (`alloc`)
//! - [`fs`]: filesystem queries (`std`)
//!
//! ## Features
//!
//! - `std` (default): everything, including [`fs`]
//! - `alloc`: [`text`] and `bitops::get_1bits` without `std`
//! - `tracing`: structured events for clamped buffer accesses, failed text
//!   conversions and filesystem queries
//! - `kani`: formal verification harnesses
//!
//! ```
//! use prim::prelude::*;
//!
//! let mut board = Buffer2::<u8, 8, 8>::new();
//! board[6][4] = 1;
//!
//! let mut occupied = 0u64;
//! bitops::set(6 * 8 + 4, &mut occupied);
//! assert_eq!(bitops::lsb(occupied), Some(52));
//! assert_eq!(board.iter().flatten().filter(|&&v| v == 1).count(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod prelude;

pub use prim_error::{codes, Error, ErrorCategory, ErrorSource, Result};
pub use prim_foundation::{buffer, policy, type_traits, zeroable};
pub use prim_foundation::{BoundedBuffer, BoundsPolicy, Buffer2, Buffer3, Clamp, Strict, Zeroable};
pub use prim_math::{bitops, mask, word, Word};

/// String utilities
#[cfg(feature = "alloc")]
pub use prim_text as text;

/// Filesystem queries
#[cfg(feature = "std")]
pub use prim_fs as fs;
