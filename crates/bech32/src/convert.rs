//! Regrouping between symbol bit widths.

use crate::buf::FixedBuf;
use crate::error::{Bech32Error, Bech32Result};

/// Widest symbol the converter handles on either side.
const MAX_BIT_WIDTH: u32 = 8;

/// Regroups `input`, read as one MSB-first bitstream of `inbits`-wide values,
/// into `outbits`-wide values appended to `out`.
///
/// With `pad` set, leftover bits are shifted into one final zero-filled
/// symbol. Without it, the leftover must be fewer than `inbits` bits and all
/// zero. The buffer is appended to, not cleared, so on error it may hold a
/// partial result.
///
/// Both widths must be within `1..=8`.
pub fn convert_bits<const N: usize>(
    out: &mut FixedBuf<N>,
    outbits: u32,
    input: &[u8],
    inbits: u32,
    pad: bool,
) -> Bech32Result<()> {
    for width in [inbits, outbits] {
        if !(1..=MAX_BIT_WIDTH).contains(&width) {
            return Err(Bech32Error::InvalidBitWidth(width));
        }
    }

    let maxv = (1u32 << outbits) - 1;
    let max_acc = (1u32 << (inbits + outbits - 1)) - 1;
    let mut acc = 0u32;
    let mut bits = 0u32;

    for &v in input {
        if (v as u32) >> inbits != 0 {
            return Err(Bech32Error::InvalidDataValue(v));
        }

        acc = ((acc << inbits) | v as u32) & max_acc;
        bits += inbits;
        while bits >= outbits {
            bits -= outbits;
            out.try_push(((acc >> bits) & maxv) as u8)?;
        }
    }

    if pad {
        if bits > 0 {
            out.try_push(((acc << (outbits - bits)) & maxv) as u8)?;
        }
    } else if bits >= inbits {
        return Err(Bech32Error::ExcessPadding);
    } else if (acc << (outbits - bits)) & maxv != 0 {
        return Err(Bech32Error::NonzeroPadding);
    }

    Ok(())
}

/// Converts bytes into padded 5-bit symbols.
pub fn to_base32<const N: usize>(bytes: &[u8], out: &mut FixedBuf<N>) -> Bech32Result<()> {
    convert_bits(out, 5, bytes, 8, true)
}

/// Converts 5-bit symbols back into bytes, rejecting nonzero padding.
pub fn from_base32<const N: usize>(symbols: &[u8], out: &mut FixedBuf<N>) -> Bech32Result<()> {
    convert_bits(out, 8, symbols, 5, false)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bytes_to_base32() {
        let mut out = FixedBuf::<16>::new();
        to_base32(&[0xff], &mut out).unwrap();
        // 11111 111(00)
        assert_eq!(out.as_slice(), &[0x1f, 0x1c]);
    }

    #[test]
    fn test_base32_to_bytes() {
        let mut out = FixedBuf::<16>::new();
        from_base32(&[0x1f, 0x1c], &mut out).unwrap();
        assert_eq!(out.as_slice(), &[0xff]);
    }

    #[test]
    fn test_appends_to_existing() {
        let mut out = FixedBuf::<16>::try_from(&[7u8][..]).unwrap();
        to_base32(&[0], &mut out).unwrap();
        assert_eq!(out.as_slice(), &[7, 0, 0]);
    }

    #[test]
    fn test_excess_padding() {
        // A lone 5-bit symbol can't make a whole byte.
        let mut out = FixedBuf::<16>::new();
        assert_eq!(from_base32(&[1], &mut out), Err(Bech32Error::ExcessPadding));
    }

    #[test]
    fn test_nonzero_padding() {
        // 10 bits: one byte of zeros then two leftover bits `01`.
        let mut out = FixedBuf::<16>::new();
        assert_eq!(
            from_base32(&[0, 1], &mut out),
            Err(Bech32Error::NonzeroPadding)
        );

        let mut out = FixedBuf::<16>::new();
        from_base32(&[0, 0], &mut out).unwrap();
        assert_eq!(out.as_slice(), &[0]);
    }

    #[test]
    fn test_value_too_wide() {
        let mut out = FixedBuf::<16>::new();
        assert_eq!(
            from_base32(&[32], &mut out),
            Err(Bech32Error::InvalidDataValue(32))
        );
    }

    #[test]
    fn test_invalid_bit_width() {
        let mut out = FixedBuf::<16>::new();
        assert_eq!(
            convert_bits(&mut out, 0, &[1], 8, true),
            Err(Bech32Error::InvalidBitWidth(0))
        );
        assert_eq!(
            convert_bits(&mut out, 5, &[1], 32, false),
            Err(Bech32Error::InvalidBitWidth(32))
        );
        assert_eq!(
            convert_bits(&mut out, 9, &[1], 8, true),
            Err(Bech32Error::InvalidBitWidth(9))
        );
        assert!(out.is_empty());

        convert_bits(&mut out, 1, &[0b1010_0000], 8, false).unwrap();
        assert_eq!(out.as_slice(), &[1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_capacity_exceeded() {
        // 40 bytes fill 64 symbols exactly, one more byte spills over.
        let mut out = FixedBuf::<64>::new();
        to_base32(&[0xaa; 40], &mut out).unwrap();
        assert_eq!(out.len(), 64);

        let mut out = FixedBuf::<64>::new();
        assert_eq!(
            to_base32(&[0xaa; 41], &mut out),
            Err(Bech32Error::CapacityExceeded(64))
        );
    }

    proptest! {
        #[test]
        fn proptest_base32_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..=50)) {
            let mut symbols = FixedBuf::<80>::new();
            to_base32(&bytes, &mut symbols).expect("test: to_base32");
            prop_assert_eq!(symbols.len(), (bytes.len() * 8).div_ceil(5));
            prop_assert!(symbols.iter().all(|v| *v < 32));

            let mut back = FixedBuf::<50>::new();
            from_base32(&symbols, &mut back).expect("test: from_base32");
            prop_assert_eq!(back.as_slice(), bytes.as_slice());
        }
    }
}
