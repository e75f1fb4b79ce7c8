//! Bech32 string codec with fixed-capacity buffers.
//!
//! Implements the original Bech32 checksum (BIP-173, target constant `1`),
//! the generic string [`encode`] and [`decode`] over 5-bit data, and the
//! [`convert_bits`] regrouping used to move between bytes and 5-bit symbols.
//! Nothing here allocates: outputs are inline [`FixedBuf`] values whose
//! appends are capacity-checked.
//!
//! ```
//! use iota_bech32::{FixedBuf, decode, encode, from_base32, to_base32};
//!
//! let mut symbols = FixedBuf::<64>::new();
//! to_base32(&[0u8; 33], &mut symbols).unwrap();
//! let s = encode("iota", &symbols).unwrap();
//! assert_eq!(s, "iota1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnhs0em");
//!
//! let (hrp, data) = decode(&s).unwrap();
//! let mut bytes = FixedBuf::<40>::new();
//! from_base32(&data, &mut bytes).unwrap();
//! assert_eq!(hrp, "iota");
//! assert_eq!(bytes.as_slice(), &[0u8; 33]);
//! ```

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
mod buf;
pub mod checksum;
mod codec;
mod convert;
mod error;
mod hrp;
#[cfg(feature = "serde")]
mod serde;

// Test-only dependencies used in serde tests when the `serde` feature is
// disabled, to satisfy unused dependency lint for dev-deps.
#[cfg(all(test, not(feature = "serde")))]
use bincode as _;
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

pub use buf::{Bech32String, FixedBuf, MAX_STRING_LEN};
pub use checksum::{CHARSET, CHECKSUM_LEN, Polymod, polymod_step};
pub use codec::{Bech32Data, MAX_DATA_LEN, MIN_STRING_LEN, SEPARATOR, decode, encode, encode_hrp};
pub use convert::{convert_bits, from_base32, to_base32};
pub use error::{Bech32Error, Bech32Result};
pub use hrp::{Hrp, MAX_HRP_LEN};
