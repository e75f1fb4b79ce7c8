use iota_bech32::{Bech32Error, Hrp};
use thiserror::Error;

/// Errors for encoding and decoding address strings.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AddrFmtError {
    /// The underlying Bech32 string or conversion was malformed.
    #[error("bech32: {0}")]
    Bech32(#[from] Bech32Error),

    /// Decoded 5-bit payload was empty or longer than an address can be.
    #[error("invalid address payload length {0}")]
    InvalidPayloadLen(usize),

    /// Prefix did not match the expected one.
    #[error("address had incorrect hrp (found {0})")]
    MismatchHrp(Hrp),

    /// The leading address type byte isn't one we support.
    #[error("unsupported address type {0}")]
    UnsupportedAddrType(u8),
}

/// Wrapper result type.
pub type AddrFmtResult<T> = Result<T, AddrFmtError>;
