// PRIM - prim-text
// Module: PRIM String Utilities
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! String utilities for PRIM.
//!
//! [`SuperString`] wraps an owned `String` with trimming, ASCII case mapping,
//! splitting and joining helpers. The [`convert`] module turns text into
//! primitive values and back.
//!
//! ```
//! use prim_text::SuperString;
//!
//! let line = SuperString::new("  move e2 e4\r\n");
//! let tokens = line.trim().split(" ");
//! assert_eq!(tokens, ["move", "e2", "e4"]);
//! assert_eq!(SuperString::build("-", &tokens), "move-e2-e4");
//!
//! let depth: u32 = SuperString::new(" 12 ").parse()?;
//! assert_eq!(depth, 12);
//! # Ok::<(), prim_text::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

extern crate alloc;

pub mod convert;
/// Owned string wrapper with trim, case and split helpers
pub mod superstring;

pub use convert::{from_string, from_string_radix, to_string, FromText, FromTextRadix, ToText};
pub use prim_error::{Error, Result};
pub use superstring::{SuperString, WHITESPACE};
