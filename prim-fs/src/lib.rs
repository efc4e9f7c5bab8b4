// PRIM - prim-fs
// Module: PRIM Filesystem Queries
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Minimal filesystem queries.
//!
//! The predicates never fail: any path that cannot be inspected reports
//! `false`. Size and content queries return `prim_error::Result` with an
//! `Io` category error.
//!
//! ```no_run
//! use prim_fs::{exists, fsize, read_lines};
//!
//! if exists("book.txt") {
//!     let bytes = fsize("book.txt")?;
//!     let lines = read_lines("book.txt")?;
//!     println!("{bytes} bytes, {} lines", lines.len());
//! }
//! # Ok::<(), prim_fs::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::fs;
use std::io;
use std::path::Path;

pub use prim_error::{Error, Result};

macro_rules! fs_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)*);
    };
}

fn map_io_error(error: &io::Error) -> Error {
    match error.kind() {
        io::ErrorKind::NotFound => Error::path_not_found("Path does not exist"),
        io::ErrorKind::InvalidData => Error::invalid_text("File is not valid UTF-8 text"),
        _ => Error::read_failed("File could not be read"),
    }
}

/// `true` when `path` names an existing file or directory.
#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let found = path.exists();
    fs_event!(trace, path = %path.display(), found, "exists");
    found
}

/// `true` when `path` names an existing regular file.
#[must_use]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let file = path.is_file();
    fs_event!(trace, path = %path.display(), file, "is_file");
    file
}

/// `true` when `path` names an existing directory.
#[must_use]
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let dir = path.is_dir();
    fs_event!(trace, path = %path.display(), dir, "is_dir");
    dir
}

/// Size of a regular file in bytes.
///
/// # Errors
///
/// Returns an `Io` error when `path` is missing, names a directory, or its
/// metadata cannot be read.
pub fn fsize(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| {
        fs_event!(debug, path = %path.display(), error = %e, "fsize failed");
        map_io_error(&e)
    })?;

    if metadata.is_dir() {
        fs_event!(debug, path = %path.display(), "fsize on a directory");
        return Err(Error::is_a_directory("Path is a directory, not a file"));
    }

    let len = metadata.len();
    fs_event!(debug, path = %path.display(), len, "fsize");
    Ok(len)
}

/// Every line of a text file, without line terminators.
///
/// Both `\n` and `\r\n` end a line. A final line without a terminator is
/// kept; a trailing terminator does not produce an empty last line.
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be opened or read, names a
/// directory, or is not valid UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(Error::is_a_directory("Path is a directory, not a file"));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        fs_event!(debug, path = %path.display(), error = %e, "read_lines failed");
        map_io_error(&e)
    })?;

    let lines: Vec<String> = contents.lines().map(String::from).collect();
    fs_event!(debug, path = %path.display(), count = lines.len(), "read_lines");
    Ok(lines)
}
