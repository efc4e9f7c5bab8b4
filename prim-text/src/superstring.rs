// PRIM - prim-text
// Module: SuperString
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use prim_error::Result;

use crate::convert::FromText;

/// Characters removed by the trim operations: space, tab, newline, vertical
/// tab, form feed and carriage return.
pub const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// An owned string with utility operations.
///
/// Every transforming operation returns a new value and leaves `self`
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuperString {
    inner: String,
}

impl SuperString {
    /// Wrap a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Copy of the wrapped string.
    #[must_use]
    pub fn get(&self) -> String {
        self.inner.clone()
    }

    /// Borrow the wrapped string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Unwrap into the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// `true` when the string begins with `prefix`. An empty prefix never
    /// matches.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.inner.starts_with(prefix)
    }

    /// `true` when the string ends with `suffix`. An empty suffix never
    /// matches.
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        !suffix.is_empty() && self.inner.ends_with(suffix)
    }

    /// ASCII lower case. Non-ASCII characters are left as they are.
    #[must_use]
    pub fn to_lower(&self) -> Self {
        Self::new(self.inner.to_ascii_lowercase())
    }

    /// ASCII upper case. Non-ASCII characters are left as they are.
    #[must_use]
    pub fn to_upper(&self) -> Self {
        Self::new(self.inner.to_ascii_uppercase())
    }

    /// Strip leading [`WHITESPACE`].
    #[must_use]
    pub fn ltrim(&self) -> Self {
        Self::new(self.inner.trim_start_matches(&WHITESPACE[..]))
    }

    /// Strip trailing [`WHITESPACE`].
    #[must_use]
    pub fn rtrim(&self) -> Self {
        Self::new(self.inner.trim_end_matches(&WHITESPACE[..]))
    }

    /// Strip leading and trailing [`WHITESPACE`].
    #[must_use]
    pub fn trim(&self) -> Self {
        Self::new(self.inner.trim_matches(&WHITESPACE[..]))
    }

    /// Tokens separated by `delimiter`, with empty tokens dropped.
    ///
    /// An empty delimiter yields the whole string as the only token.
    ///
    /// ```
    /// use prim_text::SuperString;
    ///
    /// let s = SuperString::new(",a,,b,");
    /// assert_eq!(s.split(","), ["a", "b"]);
    /// assert_eq!(s.split(""), [",a,,b,"]);
    /// assert!(SuperString::new("").split(",").is_empty());
    /// ```
    #[must_use]
    pub fn split(&self, delimiter: &str) -> Vec<String> {
        if delimiter.is_empty() {
            return alloc::vec![self.inner.clone()];
        }

        self.inner
            .split(delimiter)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    /// [`split`](Self::split) on a single space.
    #[must_use]
    pub fn split_whitespace_default(&self) -> Vec<String> {
        self.split(" ")
    }

    /// Chunks of `size` characters; the last chunk holds the remainder.
    ///
    /// A size of zero yields nothing. An empty string yields one empty
    /// chunk. Chunks never split a multi-byte character.
    #[must_use]
    pub fn split_every(&self, size: usize) -> Vec<String> {
        let mut tokens = Vec::new();
        if size == 0 {
            return tokens;
        }

        let mut token = String::new();
        let mut chars = 0;
        for ch in self.inner.chars() {
            token.push(ch);
            chars += 1;
            if chars == size {
                tokens.push(core::mem::take(&mut token));
                chars = 0;
            }
        }

        if chars > 0 || tokens.is_empty() {
            tokens.push(token);
        }
        tokens
    }

    /// Join `tokens`, placing `separator` between consecutive ones.
    pub fn build<I, S>(separator: &str, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, token) in tokens.into_iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(token.as_ref());
        }
        out
    }

    /// Convert the text into a value; see [`FromText`].
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error when the text does not describe a `T`.
    pub fn parse<T: FromText>(&self) -> Result<T> {
        crate::convert::from_string(&self.inner)
    }
}

impl From<&str> for SuperString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SuperString {
    fn from(s: String) -> Self {
        Self { inner: s }
    }
}

impl From<SuperString> for String {
    fn from(s: SuperString) -> Self {
        s.inner
    }
}

impl Deref for SuperString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for SuperString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for SuperString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl PartialEq<str> for SuperString {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for SuperString {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}
