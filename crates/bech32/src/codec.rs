//! Generic Bech32 string encoding and decoding over 5-bit data.
//!
//! A formatted string looks like:
//!
//! ```text
//! <hrp> "1" <data symbols> <6 checksum symbols>
//! ```
//!
//! and is at most [`MAX_STRING_LEN`] characters. Encoding only accepts a
//! lowercase prefix. Decoding accepts an all-lowercase or all-uppercase
//! string and returns the prefix lowercased.

use crate::buf::{Bech32String, FixedBuf, MAX_STRING_LEN};
use crate::checksum::{CHECKSUM_LEN, Polymod, char_from_symbol, symbol_from_char};
use crate::error::{Bech32Error, Bech32Result};
use crate::hrp::{Hrp, MAX_HRP_LEN, check_hrp_bytes, check_hrp_char};

/// Shortest string the decoder will look at: one prefix char, separator and
/// checksum.
pub const MIN_STRING_LEN: usize = 1 + 1 + CHECKSUM_LEN;

/// Maximum number of data symbols a decoded string can carry.
pub const MAX_DATA_LEN: usize = MAX_STRING_LEN - MIN_STRING_LEN;

/// The separator between the prefix and the data part.
pub const SEPARATOR: u8 = b'1';

/// Decoded 5-bit payload, without the checksum.
pub type Bech32Data = FixedBuf<MAX_DATA_LEN>;

/// Encodes 5-bit `data` under the lowercase prefix `hrp`.
pub fn encode(hrp: &str, data: &[u8]) -> Bech32Result<Bech32String> {
    let hrp = hrp.as_bytes();
    check_hrp_bytes(hrp)?;
    encode_checked(hrp, data)
}

/// Encodes 5-bit `data` under an already validated prefix.
pub fn encode_hrp(hrp: &Hrp, data: &[u8]) -> Bech32Result<Bech32String> {
    encode_checked(hrp.as_bytes(), data)
}

fn encode_checked(hrp: &[u8], data: &[u8]) -> Bech32Result<Bech32String> {
    let total_len = hrp.len() + 1 + data.len() + CHECKSUM_LEN;
    if total_len > MAX_STRING_LEN {
        return Err(Bech32Error::ExceedsMaxLength(total_len));
    }

    let mut pm = Polymod::new();
    pm.input_hrp(hrp);

    let mut out = FixedBuf::<MAX_STRING_LEN>::new();
    out.try_extend_from_slice(hrp)?;
    out.try_push(SEPARATOR)?;

    for &v in data {
        if v >> 5 != 0 {
            return Err(Bech32Error::InvalidDataValue(v));
        }
        pm.input_fe(v);
        out.try_push(char_from_symbol(v))?;
    }

    for v in pm.checksum_symbols() {
        out.try_push(char_from_symbol(v))?;
    }

    Ok(Bech32String::from_ascii(out))
}

/// Decodes a string into its lowercased prefix and 5-bit data, verifying the
/// checksum.
pub fn decode(input: &str) -> Bech32Result<(Hrp, Bech32Data)> {
    let input = input.as_bytes();
    if !(MIN_STRING_LEN..=MAX_STRING_LEN).contains(&input.len()) {
        return Err(Bech32Error::InvalidLength(input.len()));
    }

    let sep_pos = input
        .iter()
        .rposition(|ch| *ch == SEPARATOR)
        .ok_or(Bech32Error::MissingSeparator)?;
    if sep_pos == 0 {
        return Err(Bech32Error::EmptyHrp);
    }

    let (hrp_part, rest) = input.split_at(sep_pos);
    let data_part = &rest[1..];
    if data_part.len() < CHECKSUM_LEN {
        return Err(Bech32Error::TooShortChecksum);
    }

    let mut have_lower = false;
    let mut have_upper = false;

    let mut hrp = FixedBuf::<MAX_HRP_LEN>::new();
    for &ch in hrp_part {
        check_hrp_char(ch)?;
        if ch.is_ascii_lowercase() {
            have_lower = true;
        } else if ch.is_ascii_uppercase() {
            have_upper = true;
        }
        hrp.try_push(ch.to_ascii_lowercase())?;
    }

    let mut pm = Polymod::new();
    pm.input_hrp(hrp.as_slice());

    let payload_len = data_part.len() - CHECKSUM_LEN;
    let mut data = Bech32Data::new();
    for (i, &ch) in data_part.iter().enumerate() {
        let v = symbol_from_char(ch).ok_or(Bech32Error::InvalidDataChar(ch))?;
        if ch.is_ascii_lowercase() {
            have_lower = true;
        } else if ch.is_ascii_uppercase() {
            have_upper = true;
        }

        pm.input_fe(v);
        if i < payload_len {
            data.try_push(v)?;
        }
    }

    if have_lower && have_upper {
        return Err(Bech32Error::MixedCase);
    }

    if !pm.is_valid() {
        return Err(Bech32Error::InvalidChecksum);
    }

    Ok((Hrp::from_normalized(hrp), data))
}
