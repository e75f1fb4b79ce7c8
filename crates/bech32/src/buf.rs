//! Fixed-capacity buffers used in place of heap allocation.

use std::fmt;
use std::ops::Deref;
use std::str;

use crate::error::{Bech32Error, Bech32Result};

/// Maximum length of a formatted string.
pub const MAX_STRING_LEN: usize = 90;

/// Byte buffer with a fixed capacity of `N` and a tracked length.
///
/// Appends past the capacity fail with [`Bech32Error::CapacityExceeded`]
/// rather than truncating.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FixedBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuf<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Number of bytes written.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes have been written.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Appends one byte.
    pub fn try_push(&mut self, b: u8) -> Bech32Result<()> {
        if self.len >= N {
            return Err(Bech32Error::CapacityExceeded(N));
        }

        self.buf[self.len] = b;
        self.len += 1;
        Ok(())
    }

    /// Appends a slice, leaving the buffer untouched if it doesn't fit.
    pub fn try_extend_from_slice(&mut self, bytes: &[u8]) -> Bech32Result<()> {
        let end = self.len + bytes.len();
        if end > N {
            return Err(Bech32Error::CapacityExceeded(N));
        }

        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Resets the length to zero, zeroing the previously written bytes.
    pub fn clear(&mut self) {
        self.buf[..self.len].fill(0);
        self.len = 0;
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for FixedBuf<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBuf<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedBuf<N> {
    type Error = Bech32Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut buf = Self::new();
        buf.try_extend_from_slice(value)?;
        Ok(buf)
    }
}

impl<const N: usize> PartialEq<[u8]> for FixedBuf<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> fmt::Debug for FixedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// A formatted Bech32 string, held inline.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bech32String(FixedBuf<MAX_STRING_LEN>);

impl Bech32String {
    /// Wraps a buffer the encoder filled with ASCII.
    pub(crate) fn from_ascii(buf: FixedBuf<MAX_STRING_LEN>) -> Self {
        debug_assert!(buf.is_ascii());
        Self(buf)
    }

    /// Returns the string.
    pub fn as_str(&self) -> &str {
        str::from_utf8(self.0.as_slice()).expect("bech32: encoder wrote non-ascii")
    }

    /// Returns the string bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length of the string.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty. Never true for encoder output.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Bech32String {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Bech32String {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Bech32String {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Bech32String {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Bech32String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Bech32String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
