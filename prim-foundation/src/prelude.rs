//! Prelude module for prim-foundation
//!
//! Re-exports the error prelude together with the buffer types, policies
//! and traits of this crate.

pub use prim_error::prelude::*;

pub use crate::{
    buffer::{BoundedBuffer, Buffer2, Buffer3},
    policy::{BoundsPolicy, Clamp, Strict},
    type_traits::{
        is_bool, is_char, is_double, is_float, is_int16, is_int32, is_int64, is_int8, is_string,
        is_uchar, is_uint16, is_uint32, is_uint64, kind_of, TypeKind, TypeTag,
    },
    zeroable::Zeroable,
};
