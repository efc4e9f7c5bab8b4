// PRIM - prim-error
// Module: PRIM Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling system for PRIM
//!
//! Every fallible operation in the workspace reports one of these values. The
//! category says which family of contract was broken, the code pins down the
//! exact condition.

use core::fmt;

use crate::codes;

/// `Error` categories for PRIM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Index, offset or bit position outside its valid domain
    Bounds    = 1,
    /// Output storage too small
    Capacity  = 3,
    /// Text conversion errors
    Parse     = 4,
    /// Filesystem errors
    Io        = 5,
    /// System errors
    System    = 9,
}

impl ErrorCategory {
    /// Short human readable name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bounds => "Bounds",
            Self::Capacity => "Capacity",
            Self::Parse => "Parse",
            Self::Io => "Io",
            Self::System => "System",
        }
    }

    /// Inclusive-exclusive range of codes reserved for this category
    #[must_use]
    pub const fn code_range(self) -> (u16, u16) {
        match self {
            Self::Bounds => (1000, 2000),
            Self::Capacity => (3000, 4000),
            Self::Parse => (4000, 5000),
            Self::Io => (5000, 6000),
            Self::System => (9000, 10000),
        }
    }
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// PRIM `Error` type
///
/// It provides categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Buffer index out of range error
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );
    /// Bit position out of range error
    pub const BIT_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Bounds,
        codes::BIT_OUT_OF_RANGE,
        "Bit index exceeds word width",
    );
    /// Output buffer too small error
    pub const OUTPUT_TOO_SMALL: Self = Self::new(
        ErrorCategory::Capacity,
        codes::OUTPUT_TOO_SMALL,
        "Output buffer too small",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is an I/O error
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        self.category == ErrorCategory::Io
    }

    /// Check if this is a system error
    #[must_use]
    pub fn is_system_error(&self) -> bool {
        self.category == ErrorCategory::System
    }

    /// Check that the code lies in the range reserved for the category
    #[must_use]
    pub const fn validate_integrity(&self) -> bool {
        let (start, end) = self.category.code_range();
        self.code >= start && self.code < end && !self.message.is_empty()
    }

    // Factory methods

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create a bit out of range error
    #[must_use]
    pub const fn bit_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::BIT_OUT_OF_RANGE, message)
    }

    /// Create an offset out of range error
    #[must_use]
    pub const fn offset_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::OFFSET_OUT_OF_RANGE, message)
    }

    /// Create an output too small error
    #[must_use]
    pub const fn output_too_small(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::OUTPUT_TOO_SMALL, message)
    }

    /// Create an invalid boolean error
    #[must_use]
    pub const fn invalid_bool(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_BOOL, message)
    }

    /// Create an invalid integer error
    #[must_use]
    pub const fn invalid_integer(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_INTEGER, message)
    }

    /// Create an integer overflow error
    #[must_use]
    pub const fn integer_overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INTEGER_OVERFLOW, message)
    }

    /// Create an invalid float error
    #[must_use]
    pub const fn invalid_float(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_FLOAT, message)
    }

    /// Create an invalid character error
    #[must_use]
    pub const fn invalid_char(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_CHAR, message)
    }

    /// Create a path not found error
    #[must_use]
    pub const fn path_not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::PATH_NOT_FOUND, message)
    }

    /// Create an is-a-directory error
    #[must_use]
    pub const fn is_a_directory(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::IS_A_DIRECTORY, message)
    }

    /// Create a read failed error
    #[must_use]
    pub const fn read_failed(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::READ_FAILED, message)
    }

    /// Create an invalid text error
    #[must_use]
    pub const fn invalid_text(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::INVALID_TEXT, message)
    }

    /// Create an invalid radix error
    #[must_use]
    pub const fn invalid_radix(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_RADIX, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][E{:04X}] {}",
            self.category.as_str(),
            self.code,
            self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(
            ErrorCategory::System,
            codes::FORMAT_ERROR,
            "Formatting error (static)",
        )
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(e: core::num::ParseIntError) -> Self {
        use core::num::IntErrorKind;

        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Self::integer_overflow("Integer does not fit the requested width")
            },
            _ => Self::invalid_integer("Invalid integer literal"),
        }
    }
}

impl From<core::num::ParseFloatError> for Error {
    fn from(_: core::num::ParseFloatError) -> Self {
        Self::invalid_float("Invalid floating point literal")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let error = Error::index_out_of_range("Buffer index out of range");
        let mut buf = [0u8; 64];
        let mut writer = SliceWriter { buf: &mut buf, len: 0 };
        core::fmt::write(&mut writer, format_args!("{error}")).unwrap();
        let written = core::str::from_utf8(&writer.buf[..writer.len]).unwrap();
        assert_eq!(written, "[Bounds][E03E8] Buffer index out of range");
    }

    #[test]
    fn test_category_predicates() {
        assert!(Error::BIT_OUT_OF_RANGE.is_bounds_error());
        assert!(Error::OUTPUT_TOO_SMALL.is_capacity_error());
        assert!(Error::invalid_float("x").is_parse_error());
        assert!(Error::path_not_found("x").is_io_error());
        assert!(!Error::path_not_found("x").is_bounds_error());
    }

    #[test]
    fn test_factory_codes_match_category_ranges() {
        let errors = [
            Error::index_out_of_range("a"),
            Error::bit_out_of_range("b"),
            Error::offset_out_of_range("c"),
            Error::output_too_small("f"),
            Error::invalid_bool("h"),
            Error::invalid_integer("i"),
            Error::integer_overflow("j"),
            Error::invalid_float("k"),
            Error::invalid_char("l"),
            Error::path_not_found("m"),
            Error::is_a_directory("n"),
            Error::read_failed("o"),
            Error::invalid_text("p"),
            Error::invalid_radix("q"),
        ];
        for error in errors {
            assert!(error.validate_integrity(), "{:?}", error);
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let overflow: Error = "300".parse::<u8>().unwrap_err().into();
        assert_eq!(overflow.code, codes::INTEGER_OVERFLOW);

        let invalid: Error = "abc".parse::<u8>().unwrap_err().into();
        assert_eq!(invalid.code, codes::INVALID_INTEGER);
    }

    struct SliceWriter<'a> {
        buf: &'a mut [u8],
        len: usize,
    }

    impl core::fmt::Write for SliceWriter<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let end = self.len + bytes.len();
            if end > self.buf.len() {
                return Err(core::fmt::Error);
            }
            self.buf[self.len..end].copy_from_slice(bytes);
            self.len = end;
            Ok(())
        }
    }
}
