// PRIM - prim-foundation
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Core containers and type utilities for the PRIM utility primitives.
//!
//! This crate provides the bounds-checked fixed-size buffer, the policies
//! that decide its out-of-range behaviour, zero-fill support and compile-time
//! type predicates. It supports three configurations:
//! - `std`: Full standard library support
//! - `no_std` + `alloc`: No standard library but with allocation
//! - `no_std` + `no_alloc`: Pure no_std without any allocation
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc`)
//! - `alloc`: Enables allocation support for `no_std` environments
//! - `tracing`: Structured warnings for clamped accesses and buffer spans
//! - `kani`: Formal verification harnesses
//! - Default: Pure `no_std` without allocation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

/// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Fixed-size bounds-checked buffers
pub mod buffer;
/// Out-of-range policies
pub mod policy;
/// Compile-time type classification
pub mod type_traits;
/// Zero-fill trait
pub mod zeroable;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use buffer::{BoundedBuffer, Buffer2, Buffer3};
pub use policy::{BoundsPolicy, Clamp, Strict};
pub use prim_error::{codes, Error, ErrorCategory, Result};
pub use type_traits::{TypeKind, TypeTag};
pub use zeroable::Zeroable;
