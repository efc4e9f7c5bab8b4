// PRIM - prim-text
// Module: Text conversion
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Conversion between text and primitive values.
//!
//! Parsing trims [`WHITESPACE`](crate::WHITESPACE) first, except for `char`
//! which takes the first character verbatim. Booleans accept `true`, `false`,
//! `1` and `0` in any ASCII case. Floats render with `DIGITS` decimals.
//!
//! ```
//! use prim_text::convert::{from_string, from_string_radix, to_string};
//!
//! assert_eq!(from_string::<bool>(" TRUE\n")?, true);
//! assert_eq!(from_string::<i16>("-42")?, -42);
//! assert!(from_string::<u8>("256").is_err());
//! assert_eq!(to_string(&0.5f32), "0.500000");
//! assert_eq!(to_string(&false), "false");
//! assert_eq!(from_string_radix::<i32>("ff", 16)?, 255);
//! # Ok::<(), prim_text::Error>(())
//! ```

use alloc::string::{String, ToString};

use prim_error::{Error, Result};

use crate::superstring::WHITESPACE;

/// Types that can be produced from text.
pub trait FromText: Sized {
    /// Parse `text` into a value.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` category error when `text` does not describe a
    /// value of this type.
    fn from_text(text: &str) -> Result<Self>;
}

/// Types with a canonical text rendering.
pub trait ToText {
    /// Render `self` as text.
    fn to_text(&self) -> String;
}

fn trimmed(text: &str) -> &str {
    text.trim_matches(&WHITESPACE[..])
}

impl FromText for bool {
    fn from_text(text: &str) -> Result<Self> {
        let text = trimmed(text);
        if text == "1" || text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text == "0" || text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::invalid_bool("Expected true, false, 1 or 0"))
        }
    }
}

impl FromText for char {
    fn from_text(text: &str) -> Result<Self> {
        text.chars()
            .next()
            .ok_or(Error::invalid_char("Empty text where a character was expected"))
    }
}

impl FromText for String {
    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

macro_rules! impl_from_text_parse {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromText for $t {
                fn from_text(text: &str) -> Result<Self> {
                    Ok(trimmed(text).parse::<$t>()?)
                }
            }
        )*
    };
}

impl_from_text_parse!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Integers that can be parsed from text in an arbitrary radix.
pub trait FromTextRadix: Sized {
    /// Parse `text` as digits in `radix`.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` category error for digits outside `radix` or a
    /// value that does not fit `Self`.
    fn from_text_radix(text: &str, radix: u32) -> Result<Self>;
}

macro_rules! impl_from_text_radix {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromTextRadix for $t {
                fn from_text_radix(text: &str, radix: u32) -> Result<Self> {
                    Ok(<$t>::from_str_radix(trimmed(text), radix)?)
                }
            }
        )*
    };
}

impl_from_text_radix!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_to_text_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToText for $t {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_text_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String
);

impl ToText for f32 {
    fn to_text(&self) -> String {
        alloc::format!("{:.*}", f32::DIGITS as usize, self)
    }
}

impl ToText for f64 {
    fn to_text(&self) -> String {
        alloc::format!("{:.*}", f64::DIGITS as usize, self)
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

/// Parse `text` as a `T`.
///
/// # Errors
///
/// Returns a `Parse` category error when `text` does not describe a `T`.
pub fn from_string<T: FromText>(text: &str) -> Result<T> {
    let result = T::from_text(text);

    #[cfg(feature = "tracing")]
    {
        if let Err(error) = &result {
            tracing::debug!(
                text,
                target_type = core::any::type_name::<T>(),
                %error,
                "text conversion failed"
            );
        }
    }

    result
}

/// Parse `text` as an integer written in `radix`.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// No `0x` style prefix is recognised.
///
/// # Errors
///
/// Returns [`INVALID_RADIX`](prim_error::codes::INVALID_RADIX) unless
/// `radix` is in `2..=36`, [`INTEGER_OVERFLOW`](prim_error::codes::INTEGER_OVERFLOW)
/// when the value does not fit `T`, and
/// [`INVALID_INTEGER`](prim_error::codes::INVALID_INTEGER) otherwise.
pub fn from_string_radix<T: FromTextRadix>(text: &str, radix: u32) -> Result<T> {
    let result = if (2..=36).contains(&radix) {
        T::from_text_radix(text, radix)
    } else {
        Err(Error::invalid_radix("Radix must be in 2..=36"))
    };

    #[cfg(feature = "tracing")]
    {
        if let Err(error) = &result {
            tracing::debug!(
                text,
                radix,
                target_type = core::any::type_name::<T>(),
                %error,
                "radix conversion failed"
            );
        }
    }

    result
}

/// Render `value` as text.
pub fn to_string<T: ToText + ?Sized>(value: &T) -> String {
    value.to_text()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use prim_error::codes;

    #[test]
    fn test_bool() -> Result<()> {
        assert!(from_string::<bool>("true")?);
        assert!(from_string::<bool>(" True ")?);
        assert!(from_string::<bool>("1")?);
        assert!(!from_string::<bool>("FALSE")?);
        assert!(!from_string::<bool>("\t0\n")?);

        let err = from_string::<bool>("yes").unwrap_err();
        assert_eq!(err.code, codes::INVALID_BOOL);
        Ok(())
    }

    #[test]
    fn test_integers() -> Result<()> {
        assert_eq!(from_string::<i32>(" -17 ")?, -17);
        assert_eq!(from_string::<u64>("18446744073709551615")?, u64::MAX);

        assert_eq!(from_string::<u8>("300").unwrap_err().code, codes::INTEGER_OVERFLOW);
        assert_eq!(from_string::<u8>("-1").unwrap_err().code, codes::INVALID_INTEGER);
        assert_eq!(from_string::<i16>("").unwrap_err().code, codes::INVALID_INTEGER);
        assert!(from_string::<i16>("12abc").unwrap_err().is_parse_error());
        Ok(())
    }

    #[test]
    fn test_floats() -> Result<()> {
        assert!((from_string::<f64>(" 2.5 ")? - 2.5).abs() < f64::EPSILON);
        assert_eq!(from_string::<f32>("nope").unwrap_err().code, codes::INVALID_FLOAT);

        assert_eq!(to_string(&1.25f32), "1.250000");
        assert_eq!(to_string(&0.1f64), "0.100000000000000");
        Ok(())
    }

    #[test]
    fn test_char_and_string() -> Result<()> {
        assert_eq!(from_string::<char>("xyz")?, 'x');
        assert_eq!(from_string::<char>(" x")?, ' ');
        assert_eq!(from_string::<char>("").unwrap_err().code, codes::INVALID_CHAR);
        assert_eq!(from_string::<String>(" kept ")?, " kept ");
        Ok(())
    }

    #[test]
    fn test_radix_parsing() -> Result<()> {
        assert_eq!(from_string_radix::<i32>("7fffffff", 16)?, i32::MAX);
        assert_eq!(from_string_radix::<i32>(" -80000000 ", 16)?, i32::MIN);
        assert_eq!(from_string_radix::<u16>("FFFF", 16)?, u16::MAX);
        assert_eq!(from_string_radix::<u8>("777", 8).unwrap_err().code, codes::INTEGER_OVERFLOW);
        assert_eq!(from_string_radix::<i64>("0755", 8)?, 493);
        assert_eq!(from_string_radix::<u32>("+101", 2)?, 5);
        assert_eq!(from_string_radix::<i32>("zz", 36)?, 1295);
        Ok(())
    }

    #[test]
    fn test_radix_rejections() {
        assert_eq!(
            from_string_radix::<i32>("80000000", 16).unwrap_err().code,
            codes::INTEGER_OVERFLOW
        );
        assert_eq!(from_string_radix::<i32>("-80000001", 16).unwrap_err().code, codes::INTEGER_OVERFLOW);
        assert_eq!(from_string_radix::<u32>("12", 2).unwrap_err().code, codes::INVALID_INTEGER);
        assert_eq!(from_string_radix::<u32>("0x1f", 16).unwrap_err().code, codes::INVALID_INTEGER);
        assert_eq!(from_string_radix::<u32>("10", 1).unwrap_err().code, codes::INVALID_RADIX);
        assert_eq!(from_string_radix::<u32>("10", 37).unwrap_err().code, codes::INVALID_RADIX);
        assert!(from_string_radix::<u32>("10", 0).unwrap_err().is_parse_error());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_string(&true), "true");
        assert_eq!(to_string(&-8i8), "-8");
        assert_eq!(to_string("slice"), "slice");
        assert_eq!(to_string(&'c'), "c");
    }
}
