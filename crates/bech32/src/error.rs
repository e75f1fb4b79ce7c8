use thiserror::Error;

/// Errors from encoding, decoding or regrouping Bech32 data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Bech32Error {
    /// Input string length is outside the decodable range.
    #[error("invalid string length {0}")]
    InvalidLength(usize),

    /// Formatted string would be longer than the format allows.
    #[error("encoded length {0} exceeds maximum")]
    ExceedsMaxLength(usize),

    /// No `1` separator found.
    #[error("missing separator")]
    MissingSeparator,

    /// Human-readable part is empty.
    #[error("empty hrp")]
    EmptyHrp,

    /// Fewer than six symbols after the separator.
    #[error("checksum too short")]
    TooShortChecksum,

    /// Human-readable part byte outside the printable ASCII range.
    #[error("invalid hrp char (ch {0:#04x})")]
    InvalidHrpChar(u8),

    /// Encoder was given an uppercase human-readable part.
    #[error("uppercase hrp char (ch {0:#04x})")]
    UppercaseHrp(u8),

    /// Data or checksum character is not in the alphabet.
    #[error("invalid data char (ch {0:#04x})")]
    InvalidDataChar(u8),

    /// Value does not fit the expected bit width.
    #[error("invalid data value {0}")]
    InvalidDataValue(u8),

    /// String mixes upper and lower case.
    #[error("mixed case")]
    MixedCase,

    /// Checksum residue does not match.
    #[error("invalid checksum")]
    InvalidChecksum,

    /// Unpadded conversion left a whole input symbol unconsumed.
    #[error("excess padding")]
    ExcessPadding,

    /// Unpadded conversion left nonzero trailing bits.
    #[error("nonzero padding")]
    NonzeroPadding,

    /// Bit width outside what the converter supports.
    #[error("invalid bit width {0}")]
    InvalidBitWidth(u32),

    /// Tried to append past the end of a fixed buffer.
    #[error("exceeded {0} element capacity")]
    CapacityExceeded(usize),
}

/// Wrapper result type.
pub type Bech32Result<T> = Result<T, Bech32Error>;
