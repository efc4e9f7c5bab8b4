// PRIM - prim-error
// Module: PRIM Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for PRIM

// Bounds error codes (1000-1999)
/// Index outside the valid range of a container
pub const INDEX_OUT_OF_RANGE: u16 = 1000;
/// Bit position greater than or equal to the word width
pub const BIT_OUT_OF_RANGE: u16 = 1001;
/// Pointer offset past the last element of a buffer
pub const OFFSET_OUT_OF_RANGE: u16 = 1002;

// Capacity error codes (3000-3999)
/// Caller-provided output buffer is too small
pub const OUTPUT_TOO_SMALL: u16 = 3000;

// Parse error codes (4000-4999)
/// Text does not describe a boolean
pub const INVALID_BOOL: u16 = 4001;
/// Text does not describe an integer of the requested width
pub const INVALID_INTEGER: u16 = 4002;
/// Text does not describe a floating point number
pub const INVALID_FLOAT: u16 = 4003;
/// Text is empty where a character was expected
pub const INVALID_CHAR: u16 = 4004;
/// Integer value does not fit the requested width
pub const INTEGER_OVERFLOW: u16 = 4005;
/// Radix outside `2..=36`
pub const INVALID_RADIX: u16 = 4006;

// I/O error codes (5000-5999)
/// Path does not exist
pub const PATH_NOT_FOUND: u16 = 5000;
/// Path names a directory where a regular file is required
pub const IS_A_DIRECTORY: u16 = 5001;
/// File could not be opened or read
pub const READ_FAILED: u16 = 5002;
/// File contents are not valid UTF-8 text
pub const INVALID_TEXT: u16 = 5003;

// System error codes (9000-9999)
/// Formatting into a writer failed
pub const FORMAT_ERROR: u16 = 9001;
