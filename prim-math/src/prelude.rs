// Copyright (c) 2024 Ralf Anton Beier
// SPDX-License-Identifier: MIT
// Project: PRIM
// Module: prim-math::prelude

//! Prelude for the prim-math crate.

pub use prim_error::{Error, ErrorCategory, Result};

pub use crate::bitops::{self, Ones};
pub use crate::word::Word;
