//! Bech32 address strings.
//!
//! Wraps the generic codec from [`iota_bech32`] to turn raw address bytes
//! into strings like
//! `iota1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnhs0em` and
//! back. Decoding additionally checks that the string was formatted under
//! the expected prefix and that the address type byte is supported.

mod addr;
mod error;
mod types;

// Only used by the integration tests.
#[cfg(test)]
use bitcoin as _;
#[cfg(test)]
use proptest as _;

pub use addr::{AddrBuf, AddrConfig, MAX_ADDR_DATA_LEN, MAX_ADDR_LEN, decode_addr, encode_addr};
pub use error::{AddrFmtError, AddrFmtResult};
pub use iota_bech32::{Bech32String, Hrp};
pub use types::AddrType;
