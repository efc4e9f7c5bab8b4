// PRIM - prim-error
// Module: PRIM Error Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for prim-error
//!
//! Re-exports the error type, its categories and the code table so that
//! dependent crates can depend on a single glob import.

pub use core::fmt::{
    self,
    Debug,
    Display,
};

pub use crate::{
    codes,
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
