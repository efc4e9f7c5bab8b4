//! Prelude for the prim facade
//!
//! `use prim::prelude::*;` brings the error type, the buffer types and
//! policies, the bit operations and, with `alloc`, `SuperString` into scope.

pub use prim_foundation::prelude::*;
pub use prim_math::{bitops, mask, Word};

#[cfg(feature = "alloc")]
pub use prim_text::{from_string, from_string_radix, to_string, FromText, FromTextRadix, SuperString, ToText};
