// PRIM - prim-error
// Module: PRIM Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! PRIM Error handling library
//!
//! This library provides the error type shared by every PRIM crate. Errors
//! are small `Copy` values made of a category, a numeric code and a static
//! message, so they can be created and propagated without allocation in
//! `no_std` builds.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Bounds Errors (1000-1999)
//! - Index outside a fixed-size buffer
//! - Bit position outside the word width
//! - Offset past the end of a buffer
//!
//! ## Capacity Errors (3000-3999)
//! - Caller-provided output storage too small
//!
//! ## Parse Errors (4000-4999)
//! - Text that does not describe a value of the requested type
//! - Radix outside `2..=36`
//!
//! ## I/O Errors (5000-5999)
//! - Missing files, unreadable files, directories where a file is expected
//!
//! ## System Errors (9000-9999)
//! - Formatting into a writer failed
//!
//! # Usage
//!
//! ```
//! use prim_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Bounds,
//!     codes::INDEX_OUT_OF_RANGE,
//!     "Buffer index out of range",
//! );
//! assert!(error.is_bounds_error());
//!
//! let bit_error = Error::bit_out_of_range("Bit index exceeds word width");
//! assert_eq!(bit_error.code, codes::BIT_OUT_OF_RANGE);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::negative_feature_names)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for prim
pub mod codes;
/// Error and error handling types
pub mod errors;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for PRIM operations.
///
/// This type alias uses `prim_error::Error` as the error type and is usable
/// in `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
