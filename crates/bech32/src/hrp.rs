use std::fmt;
use std::str;

use crate::buf::{FixedBuf, MAX_STRING_LEN};
use crate::checksum::CHECKSUM_LEN;
use crate::error::{Bech32Error, Bech32Result};

/// Maximum length of a human-readable part, leaving room for the separator
/// and checksum.
pub const MAX_HRP_LEN: usize = MAX_STRING_LEN - 1 - CHECKSUM_LEN;

/// Lowest byte allowed in a human-readable part.
const HRP_CHAR_MIN: u8 = 33;

/// Highest byte allowed in a human-readable part.
const HRP_CHAR_MAX: u8 = 126;

/// Validated lowercase human-readable part.
///
/// Every byte is printable ASCII in `33..=126` and none is uppercase.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Hrp(FixedBuf<MAX_HRP_LEN>);

impl Hrp {
    /// Parses a lowercase human-readable part.
    pub fn new(s: &str) -> Bech32Result<Self> {
        check_hrp_bytes(s.as_bytes())?;

        let mut buf = FixedBuf::new();
        buf.try_extend_from_slice(s.as_bytes())?;
        Ok(Self(buf))
    }

    /// Builds from a buffer already checked and lowercased by the decoder.
    pub(crate) fn from_normalized(buf: FixedBuf<MAX_HRP_LEN>) -> Self {
        Self(buf)
    }

    /// Returns the prefix as a string slice.
    pub fn as_str(&self) -> &str {
        str::from_utf8(self.0.as_slice()).expect("hrp: non-ascii")
    }

    /// Returns the prefix bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks a prefix is usable for encoding.
pub(crate) fn check_hrp_bytes(hrp: &[u8]) -> Bech32Result<()> {
    if hrp.is_empty() {
        return Err(Bech32Error::EmptyHrp);
    }

    for &ch in hrp {
        check_hrp_char(ch)?;
        if ch.is_ascii_uppercase() {
            return Err(Bech32Error::UppercaseHrp(ch));
        }
    }

    if hrp.len() > MAX_HRP_LEN {
        return Err(Bech32Error::ExceedsMaxLength(hrp.len() + 1 + CHECKSUM_LEN));
    }

    Ok(())
}

pub(crate) fn check_hrp_char(ch: u8) -> Bech32Result<()> {
    if !(HRP_CHAR_MIN..=HRP_CHAR_MAX).contains(&ch) {
        return Err(Bech32Error::InvalidHrpChar(ch));
    }
    Ok(())
}

impl str::FromStr for Hrp {
    type Err = Bech32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Hrp {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Hrp {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Hrp {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hrp").field(&self.as_str()).finish()
    }
}
