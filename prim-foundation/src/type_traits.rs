// PRIM - prim-foundation
// Module: Compile-time type predicates
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time classification of a closed set of primitive types.
//!
//! Every supported type carries a [`TypeKind`] tag through [`TypeTag`]. The
//! `is_*` predicates are `const fn` and resolve entirely at compile time:
//!
//! ```
//! use prim_foundation::type_traits::{is_int32, is_uchar, TypeKind, TypeTag};
//!
//! const _: () = assert!(is_int32::<i32>());
//! assert!(!is_uchar::<i8>());
//! assert_eq!(<u16 as TypeTag>::KIND, TypeKind::U16);
//! assert_eq!(TypeKind::F64.size_bytes(), Some(8));
//! ```

/// Tag for each supported primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Owned string
    String,
}

impl TypeKind {
    /// Rust spelling of the type
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
        }
    }

    /// Fixed-width signed or unsigned integer
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    /// Can represent negative values
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    /// IEEE 754 float
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Fixed size in bytes; `None` for strings.
    #[must_use]
    pub const fn size_bytes(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::Char | Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::I64 | Self::U64 | Self::F64 => Some(8),
            Self::String => None,
        }
    }
}

impl core::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Associates a type with its [`TypeKind`].
pub trait TypeTag {
    /// Tag of the implementing type
    const KIND: TypeKind;
}

macro_rules! impl_type_tag {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl TypeTag for $t {
                const KIND: TypeKind = TypeKind::$kind;
            }
        )*
    };
}

impl_type_tag! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    str => String,
}

#[cfg(feature = "std")]
impl TypeTag for std::string::String {
    const KIND: TypeKind = TypeKind::String;
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl TypeTag for alloc::string::String {
    const KIND: TypeKind = TypeKind::String;
}

/// Kind of `T`, usable in `const` context
#[must_use]
pub const fn kind_of<T: TypeTag + ?Sized>() -> TypeKind {
    T::KIND
}

macro_rules! define_predicates {
    ($($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub const fn $name<T: TypeTag + ?Sized>() -> bool {
                matches!(T::KIND, TypeKind::$kind)
            }
        )*
    };
}

define_predicates! {
    /// `T` is `bool`
    is_bool => Bool,
    /// `T` is `char`
    is_char => Char,
    /// `T` is `i8`
    is_int8 => I8,
    /// `T` is `i16`
    is_int16 => I16,
    /// `T` is `i32`
    is_int32 => I32,
    /// `T` is `i64`
    is_int64 => I64,
    /// `T` is `u8`
    is_uchar => U8,
    /// `T` is `u16`
    is_uint16 => U16,
    /// `T` is `u32`
    is_uint32 => U32,
    /// `T` is `u64`
    is_uint64 => U64,
    /// `T` is `f32`
    is_float => F32,
    /// `T` is `f64`
    is_double => F64,
    /// `T` is a string type
    is_string => String,
}
