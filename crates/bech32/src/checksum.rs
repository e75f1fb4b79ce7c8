//! Checksum engine for the Bech32 BCH code.
//!
//! The accumulator is a 30-bit polynomial state kept in a `u32`. Each step
//! multiplies by `x` modulo the generator and the caller folds in the next
//! 5-bit symbol.

/// Generator constants, one per bit of the symbol shifted out of the state.
pub const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Residue a valid string must produce. This is the original Bech32 constant,
/// Bech32m's constant is not supported.
pub const CHECKSUM_TARGET: u32 = 1;

/// Number of checksum symbols at the end of every string.
pub const CHECKSUM_LEN: usize = 6;

/// The 32-character data alphabet, indexed by symbol value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse of [`CHARSET`] over 7-bit ASCII, accepting either case.
const CHARSET_REV: [i8; 128] = build_charset_rev();

const fn build_charset_rev() -> [i8; 128] {
    let mut rev = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        let ch = CHARSET[i];
        rev[ch as usize] = i as i8;
        rev[ch.to_ascii_uppercase() as usize] = i as i8;
        i += 1;
    }
    rev
}

/// Performs one step of the checksum, without folding in a symbol.
pub const fn polymod_step(pre: u32) -> u32 {
    let b = pre >> 25;
    let mut chk = (pre & 0x1ff_ffff) << 5;
    let mut i = 0;
    while i < GENERATORS.len() {
        if (b >> i) & 1 == 1 {
            chk ^= GENERATORS[i];
        }
        i += 1;
    }
    chk
}

/// Looks up the symbol value of an alphabet character in either case.
pub fn symbol_from_char(ch: u8) -> Option<u8> {
    if ch & 0x80 != 0 {
        return None;
    }

    let v = CHARSET_REV[ch as usize];
    (v >= 0).then_some(v as u8)
}

/// Maps a symbol value to its lowercase alphabet character.
///
/// The value must be below 32.
pub(crate) fn char_from_symbol(v: u8) -> u8 {
    CHARSET[(v & 0x1f) as usize]
}

/// Running checksum accumulator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Polymod(u32);

impl Polymod {
    /// Creates a fresh accumulator.
    pub const fn new() -> Self {
        Self(1)
    }

    /// Folds in one 5-bit symbol.
    pub fn input_fe(&mut self, v: u8) {
        self.0 = polymod_step(self.0) ^ (v & 0x1f) as u32;
    }

    /// Folds in the expanded form of a lowercase human-readable part: high
    /// bits of every char, a zero separator, then low bits of every char.
    pub fn input_hrp(&mut self, hrp: &[u8]) {
        for &ch in hrp {
            self.0 = polymod_step(self.0) ^ (ch >> 5) as u32;
        }
        self.0 = polymod_step(self.0);
        for &ch in hrp {
            self.input_fe(ch & 0x1f);
        }
    }

    /// Current raw residue.
    pub fn residue(&self) -> u32 {
        self.0
    }

    /// Whether the residue matches [`CHECKSUM_TARGET`].
    pub fn is_valid(&self) -> bool {
        self.0 == CHECKSUM_TARGET
    }

    /// Finishes the state into the six checksum symbols, most significant
    /// first.
    pub fn checksum_symbols(mut self) -> [u8; CHECKSUM_LEN] {
        for _ in 0..CHECKSUM_LEN {
            self.0 = polymod_step(self.0);
        }
        let chk = self.0 ^ CHECKSUM_TARGET;

        let mut out = [0; CHECKSUM_LEN];
        for (i, sym) in out.iter_mut().enumerate() {
            *sym = ((chk >> ((CHECKSUM_LEN - 1 - i) * 5)) & 0x1f) as u8;
        }
        out
    }
}

impl Default for Polymod {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_identity_shift() {
        // No bits above 25 set, so the step is a plain shift.
        assert_eq!(polymod_step(1), 1 << 5);
        assert_eq!(polymod_step(0), 0);
    }

    #[test]
    fn test_fresh_residue() {
        let mut pm = Polymod::default();
        assert_eq!(pm.residue(), 1);
        pm.input_fe(3);
        assert_eq!(pm.residue(), polymod_step(1) ^ 3);
        assert!(!pm.is_valid());
    }

    #[test]
    fn test_step_single_generator() {
        for (i, g) in GENERATORS.iter().enumerate() {
            assert_eq!(polymod_step(1 << (25 + i)), *g);
        }
    }

    #[test]
    fn test_charset_rev_matches_charset() {
        for (i, ch) in CHARSET.iter().enumerate() {
            assert_eq!(symbol_from_char(*ch), Some(i as u8));
            assert_eq!(symbol_from_char(ch.to_ascii_uppercase()), Some(i as u8));
            assert_eq!(char_from_symbol(i as u8), *ch);
        }
    }

    #[test]
    fn test_charset_rev_rejects_excluded() {
        for ch in [b'1', b'b', b'i', b'o', b'B', b'I', b'O', b' ', 0x7f, 0x80, 0xff] {
            assert_eq!(symbol_from_char(ch), None, "ch {ch:#04x}");
        }
    }

    #[test]
    fn test_checksum_symbols_validate() {
        let mut pm = Polymod::new();
        pm.input_hrp(b"a");
        let chk = pm.checksum_symbols();

        let mut verify = Polymod::new();
        verify.input_hrp(b"a");
        for v in chk {
            verify.input_fe(v);
        }
        assert!(verify.is_valid());
        assert_eq!(verify.residue(), CHECKSUM_TARGET);

        // "a12uel5l" is the canonical empty-payload string for "a".
        let chars: Vec<u8> = chk.iter().map(|v| char_from_symbol(*v)).collect();
        assert_eq!(&chars, b"2uel5l");
    }
}
